//! Run Query use case
//!
//! Routes a single query to image generation and/or web search and turns
//! the outcomes into an ordered list of presentation events.
//!
//! Per request: `Idle -> Classified -> [ImageAttempted] -> SearchAttempted -> Done`.
//! Every capability call is guarded on its own, so a failed image call
//! never suppresses the search that follows it.

use crate::config::RoutingConfig;
use crate::ports::image_generator::ImageGenerator;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::web_search::WebSearch;
use router_domain::{
    Capability, CapabilityError, CapabilityResult, Classifier, PresentationEvent, Query,
    extract_image_bytes, search_text,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Shown when the submitted query is empty or whitespace-only
pub const EMPTY_QUERY_WARNING: &str = "Please enter a query.";

/// Use case for routing and running a single query
pub struct RunQueryUseCase {
    image_generator: Arc<dyn ImageGenerator>,
    web_search: Arc<dyn WebSearch>,
    classifier: Classifier,
}

impl RunQueryUseCase {
    pub fn new(image_generator: Arc<dyn ImageGenerator>, web_search: Arc<dyn WebSearch>) -> Self {
        Self {
            image_generator,
            web_search,
            classifier: Classifier::default(),
        }
    }

    pub fn with_routing(mut self, routing: RoutingConfig) -> Self {
        self.classifier = routing.classifier();
        self
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, query: &str) -> Vec<PresentationEvent> {
        self.execute_with_progress(query, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        query: &str,
        progress: &dyn ProgressNotifier,
    ) -> Vec<PresentationEvent> {
        let query = match Query::try_new(query) {
            Ok(q) => q,
            Err(e) => {
                debug!("Rejected query: {}", e);
                return vec![PresentationEvent::warning(EMPTY_QUERY_WARNING)];
            }
        };

        let route = self.classifier.classify(query.content());
        info!(
            route = route.as_str(),
            profile = %self.classifier.profile(),
            "Classified query"
        );

        let mut events = vec![PresentationEvent::info(route.label())];

        if route.invokes_image_generation() {
            let image = self.generate_image(&query, progress).await;
            events.extend(image.into_events());
        }

        let search = self.search(&query, progress).await;
        events.extend(search.into_events());

        debug!("Request produced {} events", events.len());
        events
    }

    /// Invoke the image generator once, converting every outcome to a result
    async fn generate_image(
        &self,
        query: &Query,
        progress: &dyn ProgressNotifier,
    ) -> CapabilityResult {
        let capability = Capability::ImageGeneration;
        progress.on_capability_start(capability);

        let outcome = self.image_generator.generate_image(query.content()).await;
        let result: CapabilityResult = match outcome {
            Ok(raw) => match extract_image_bytes(&raw) {
                Ok(image_bytes) => {
                    info!("Image generated ({} bytes)", image_bytes.len());
                    CapabilityResult::Image { image_bytes }
                }
                Err(e) => {
                    warn!("Image generator returned an unexpected result shape");
                    CapabilityResult::Error(e)
                }
            },
            Err(fault) => {
                warn!("Image generation failed: {}", fault);
                CapabilityError::fault(capability, fault.to_string()).into()
            }
        };

        progress.on_capability_complete(capability, result.is_success());
        result
    }

    /// Invoke the web search once, converting every outcome to a result
    async fn search(&self, query: &Query, progress: &dyn ProgressNotifier) -> CapabilityResult {
        let capability = Capability::WebSearch;
        progress.on_capability_start(capability);

        let outcome = self.web_search.search(query.content()).await;
        let result: CapabilityResult = match outcome {
            Ok(payload) => match search_text(&payload) {
                Some(text) => {
                    info!("Web search returned {} bytes", text.len());
                    CapabilityResult::Search { text }
                }
                None => {
                    info!("Web search returned no results");
                    CapabilityError::empty(capability).into()
                }
            },
            Err(fault) => {
                warn!("Web search failed: {}", fault);
                CapabilityError::fault(capability, fault.to_string()).into()
            }
        };

        progress.on_capability_complete(capability, result.is_success());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::capability::CapabilityFault;
    use async_trait::async_trait;
    use router_domain::KeywordProfile;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Shared log of collaborator invocations, in call order
    type CallLog = Arc<Mutex<Vec<(&'static str, String)>>>;

    struct MockImageGenerator {
        response: Result<Value, CapabilityFault>,
        log: CallLog,
    }

    #[async_trait]
    impl ImageGenerator for MockImageGenerator {
        async fn generate_image(&self, prompt: &str) -> Result<Value, CapabilityFault> {
            self.log.lock().unwrap().push(("image", prompt.to_string()));
            self.response.clone()
        }
    }

    struct MockWebSearch {
        response: Result<Value, CapabilityFault>,
        log: CallLog,
    }

    #[async_trait]
    impl WebSearch for MockWebSearch {
        async fn search(&self, query: &str) -> Result<Value, CapabilityFault> {
            self.log.lock().unwrap().push(("search", query.to_string()));
            self.response.clone()
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        calls: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_capability_start(&self, capability: Capability) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("start:{}", capability.as_str()));
        }

        fn on_capability_complete(&self, capability: Capability, success: bool) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("done:{}:{}", capability.as_str(), success));
        }
    }

    fn image_ok() -> Result<Value, CapabilityFault> {
        // "abc"
        Ok(json!({"image": "YWJj"}))
    }

    fn search_ok() -> Result<Value, CapabilityFault> {
        Ok(json!("## Search Results"))
    }

    fn use_case(
        image: Result<Value, CapabilityFault>,
        search: Result<Value, CapabilityFault>,
    ) -> (RunQueryUseCase, CallLog) {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        let use_case = RunQueryUseCase::new(
            Arc::new(MockImageGenerator {
                response: image,
                log: Arc::clone(&log),
            }),
            Arc::new(MockWebSearch {
                response: search,
                log: Arc::clone(&log),
            }),
        );
        (use_case, log)
    }

    fn kinds(events: &[PresentationEvent]) -> Vec<&'static str> {
        events.iter().map(|e| e.kind()).collect()
    }

    fn invoked(log: &CallLog) -> Vec<&'static str> {
        log.lock().unwrap().iter().map(|(name, _)| *name).collect()
    }

    // ==================== Scenarios ====================

    #[tokio::test]
    async fn test_image_query_invokes_both_in_order() {
        let (use_case, log) = use_case(image_ok(), search_ok());

        let events = use_case.execute("draw a cat in a garden").await;

        assert_eq!(invoked(&log), vec!["image", "search"]);
        assert_eq!(
            kinds(&events),
            vec!["info", "render_image", "success", "render_text", "success"]
        );
        assert_eq!(
            events[0],
            PresentationEvent::info("Image Generation Request")
        );
        assert_eq!(events[1], PresentationEvent::RenderImage(b"abc".to_vec()));
        assert_eq!(
            events[3],
            PresentationEvent::RenderText("## Search Results".to_string())
        );
    }

    #[tokio::test]
    async fn test_search_query_invokes_only_search() {
        let (use_case, log) = use_case(image_ok(), search_ok());

        let events = use_case.execute("what is the weather today").await;

        assert_eq!(invoked(&log), vec!["search"]);
        assert_eq!(kinds(&events), vec!["info", "render_text", "success"]);
        assert_eq!(
            events[0],
            PresentationEvent::info("Information Search Request")
        );
    }

    #[tokio::test]
    async fn test_whitespace_query_warns_without_invocations() {
        let (use_case, log) = use_case(image_ok(), search_ok());

        let events = use_case.execute("   ").await;

        assert!(invoked(&log).is_empty());
        assert_eq!(events, vec![PresentationEvent::warning(EMPTY_QUERY_WARNING)]);
    }

    #[tokio::test]
    async fn test_empty_query_warns_without_invocations() {
        let (use_case, log) = use_case(image_ok(), search_ok());

        let events = use_case.execute("").await;

        assert!(invoked(&log).is_empty());
        assert_eq!(kinds(&events), vec!["warning"]);
    }

    #[tokio::test]
    async fn test_image_fault_does_not_suppress_search() {
        let (use_case, log) = use_case(
            Err(CapabilityFault::Connection("timeout".to_string())),
            search_ok(),
        );

        let events = use_case.execute("generate a sunset painting").await;

        assert_eq!(invoked(&log), vec!["image", "search"]);
        assert_eq!(
            kinds(&events),
            vec!["info", "error", "render_text", "success"]
        );
        let error = events[1].text().unwrap();
        assert!(error.contains("timeout"));
        assert!(error.starts_with("Image generation failed"));
    }

    #[tokio::test]
    async fn test_image_fault_followed_by_search_fault() {
        let (use_case, log) = use_case(
            Err(CapabilityFault::Connection("timeout".to_string())),
            Err(CapabilityFault::RequestFailed("HTTP 500".to_string())),
        );

        let events = use_case.execute("generate a sunset painting").await;

        assert_eq!(invoked(&log), vec!["image", "search"]);
        assert_eq!(kinds(&events), vec!["info", "error", "error"]);
        assert!(events[2].text().unwrap().starts_with("Web search failed"));
        assert!(events[2].text().unwrap().contains("HTTP 500"));
    }

    #[tokio::test]
    async fn test_image_missing_field_is_non_fatal_error() {
        let (use_case, log) = use_case(Ok(json!({"status": "queued"})), search_ok());

        let events = use_case.execute("a photo of the moon").await;

        assert_eq!(invoked(&log), vec!["image", "search"]);
        assert_eq!(
            kinds(&events),
            vec!["info", "error", "render_text", "success"]
        );
        let error = events[1].text().unwrap();
        assert!(error.contains("unexpected result"));
        assert!(error.contains("queued"));
    }

    #[tokio::test]
    async fn test_empty_search_is_warning_not_error() {
        let (use_case, _) = use_case(image_ok(), Ok(json!("")));

        let events = use_case.execute("capital of france").await;

        assert_eq!(kinds(&events), vec!["info", "warning"]);
        assert!(!events.iter().any(PresentationEvent::is_error));
    }

    #[tokio::test]
    async fn test_null_search_is_warning() {
        let (use_case, _) = use_case(image_ok(), Ok(Value::Null));

        let events = use_case.execute("draw a dog").await;

        assert_eq!(
            kinds(&events),
            vec!["info", "render_image", "success", "warning"]
        );
    }

    #[tokio::test]
    async fn test_query_is_trimmed_before_invocation() {
        let (use_case, log) = use_case(image_ok(), search_ok());

        use_case.execute("  draw a cat  ").await;

        let log = log.lock().unwrap();
        assert_eq!(log[0], ("image", "draw a cat".to_string()));
        assert_eq!(log[1], ("search", "draw a cat".to_string()));
    }

    #[tokio::test]
    async fn test_each_collaborator_called_at_most_once() {
        let (use_case, log) = use_case(
            Err(CapabilityFault::Timeout("30s".to_string())),
            Err(CapabilityFault::Timeout("30s".to_string())),
        );

        use_case.execute("render a castle").await;

        assert_eq!(invoked(&log), vec!["image", "search"]);
    }

    #[tokio::test]
    async fn test_classic_profile_routes_extended_keyword_to_search() {
        let (use_case, log) = use_case(image_ok(), search_ok());
        let use_case = use_case.with_routing(RoutingConfig::new(KeywordProfile::Classic));

        let events = use_case.execute("create a logo").await;

        assert_eq!(invoked(&log), vec!["search"]);
        assert_eq!(
            events[0],
            PresentationEvent::info("Information Search Request")
        );
    }

    #[tokio::test]
    async fn test_progress_callbacks_follow_invocations() {
        let (use_case, _) = use_case(
            Err(CapabilityFault::Other("boom".to_string())),
            search_ok(),
        );
        let progress = RecordingProgress::default();

        use_case
            .execute_with_progress("draw a tree", &progress)
            .await;

        assert_eq!(
            *progress.calls.lock().unwrap(),
            vec![
                "start:image_generation",
                "done:image_generation:false",
                "start:web_search",
                "done:web_search:true",
            ]
        );
    }
}
