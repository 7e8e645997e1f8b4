// ============================================================================
// ROUTE VIEWMODEL - Lógica de la vista de rutas
// ============================================================================
// Orquesta geolocalización, ruta y hospitales sobre colaboradores inyectados.
// Las respuestas se aplican en orden de llegada (la última en llegar gana).
// ============================================================================

use std::cell::Cell;
use std::fmt;
use crate::services::{ApiError, HospitalClient, LocationProvider, Notice, Notifier, RouteClient};
use crate::state::{require_location, ReactiveState, RouteViewState, ValidationError};

/// Por qué terminó una acción sin cambiar el estado
#[derive(Debug, Clone, PartialEq)]
pub enum ActionError {
    Validation(ValidationError),
    Api(ApiError),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::Validation(err) => write!(f, "{}", err),
            ActionError::Api(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ActionError {}

impl From<ValidationError> for ActionError {
    fn from(err: ValidationError) -> Self {
        ActionError::Validation(err)
    }
}

impl From<ApiError> for ActionError {
    fn from(err: ApiError) -> Self {
        ActionError::Api(err)
    }
}

pub struct RouteViewModel<C, L, N> {
    client: C,
    location: L,
    notifier: N,
    state: ReactiveState<RouteViewState>,
    location_requested: Cell<bool>,
}

impl<C, L, N> RouteViewModel<C, L, N>
where
    C: RouteClient + HospitalClient,
    L: LocationProvider,
    N: Notifier,
{
    pub fn new(client: C, location: L, notifier: N, state: ReactiveState<RouteViewState>) -> Self {
        Self {
            client,
            location,
            notifier,
            state,
            location_requested: Cell::new(false),
        }
    }

    pub fn state(&self) -> &ReactiveState<RouteViewState> {
        &self.state
    }

    /// Pedir la ubicación inicial una sola vez; si no hay permiso no pasa nada
    pub async fn on_mount(&self) {
        if self.location_requested.replace(true) {
            log::debug!("📍 [ROUTE] Ubicación ya solicitada, se ignora");
            return;
        }

        match self.location.current_position().await {
            Some(position) => {
                log::info!("📍 [ROUTE] Ubicación inicial: {}", position);
                self.state.apply(|s| s.with_located_start(position));
            }
            None => log::info!("📍 [ROUTE] Sin geolocalización, el usuario escribirá la salida"),
        }
    }

    /// Texto del input; no re-renderiza
    pub fn set_start_location(&self, text: &str) {
        self.state.apply_silently(|s| s.with_start_location(text));
    }

    pub async fn calculate_route(&self, start_location: &str) -> Result<(), ActionError> {
        let start = match require_location(start_location, ValidationError::MissingRouteStart) {
            Ok(start) => start,
            Err(err) => {
                self.notifier.notify(&Notice::Validation(err));
                return Err(err.into());
            }
        };

        match self.client.fetch_route(start).await {
            Ok(response) => {
                log::info!("✅ [ROUTE] Ruta aplicada (ETA {} min)", response.eta);
                self.state.apply(|s| s.with_route_response(response));
                Ok(())
            }
            Err(err) => {
                log::error!("❌ [ROUTE] Error fetching route data: {}", err);
                self.notifier.notify(&Notice::RouteFetchFailed);
                Err(err.into())
            }
        }
    }

    /// Los fallos de red solo se registran en el log, sin aviso
    pub async fn search_nearby_hospitals(&self, location: &str) -> Result<(), ActionError> {
        let location = match require_location(location, ValidationError::MissingSearchLocation) {
            Ok(location) => location,
            Err(err) => {
                self.notifier.notify(&Notice::Validation(err));
                return Err(err.into());
            }
        };

        match self.client.fetch_nearby_hospitals(location).await {
            Ok(hospitals) => {
                self.state.apply(|s| s.with_hospitals(hospitals));
                Ok(())
            }
            Err(err) => {
                log::error!("❌ [HOSPITALS] Error fetching nearby hospitals: {}", err);
                Err(err.into())
            }
        }
    }

    pub fn toggle_dark_mode(&self) {
        self.state.apply(RouteViewState::toggled_dark_mode);
    }

    pub fn reset_route(&self) {
        log::info!("🏠 [ROUTE] Reset");
        self.state.apply(RouteViewState::reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::join;
    use crate::models::fixtures::sample_response;
    use crate::models::{Coordinate, Eta, Hospital, RouteResponse};

    type Reply<T> = oneshot::Receiver<Result<T, ApiError>>;

    #[derive(Default)]
    struct FakeClient {
        route_replies: RefCell<VecDeque<Reply<RouteResponse>>>,
        hospital_replies: RefCell<VecDeque<Reply<Vec<Hospital>>>>,
        requests: RefCell<Vec<String>>,
    }

    impl FakeClient {
        fn reply_route(&self, result: Result<RouteResponse, ApiError>) {
            let (tx, rx) = oneshot::channel();
            tx.send(result).unwrap();
            self.route_replies.borrow_mut().push_back(rx);
        }

        fn pending_route(&self) -> oneshot::Sender<Result<RouteResponse, ApiError>> {
            let (tx, rx) = oneshot::channel();
            self.route_replies.borrow_mut().push_back(rx);
            tx
        }

        fn reply_hospitals(&self, result: Result<Vec<Hospital>, ApiError>) {
            let (tx, rx) = oneshot::channel();
            tx.send(result).unwrap();
            self.hospital_replies.borrow_mut().push_back(rx);
        }
    }

    async fn await_reply<T>(reply: Option<Reply<T>>) -> Result<T, ApiError> {
        match reply {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(ApiError::Network("dropped".into()))),
            None => Err(ApiError::Network("no reply queued".into())),
        }
    }

    #[async_trait(?Send)]
    impl RouteClient for Rc<FakeClient> {
        async fn fetch_route(&self, start: &str) -> Result<RouteResponse, ApiError> {
            self.requests.borrow_mut().push(format!("route?start={}", start));
            let reply = self.route_replies.borrow_mut().pop_front();
            await_reply(reply).await
        }
    }

    #[async_trait(?Send)]
    impl HospitalClient for Rc<FakeClient> {
        async fn fetch_nearby_hospitals(&self, location: &str) -> Result<Vec<Hospital>, ApiError> {
            self.requests.borrow_mut().push(format!("nearby_hospitals?location={}", location));
            let reply = self.hospital_replies.borrow_mut().pop_front();
            await_reply(reply).await
        }
    }

    struct FakeLocation {
        position: Option<Coordinate>,
        calls: Rc<Cell<usize>>,
    }

    #[async_trait(?Send)]
    impl LocationProvider for FakeLocation {
        async fn current_position(&self) -> Option<Coordinate> {
            self.calls.set(self.calls.get() + 1);
            self.position
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        notices: Rc<RefCell<Vec<Notice>>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: &Notice) {
            self.notices.borrow_mut().push(notice.clone());
        }
    }

    struct Harness {
        vm: RouteViewModel<Rc<FakeClient>, FakeLocation, RecordingNotifier>,
        client: Rc<FakeClient>,
        notices: Rc<RefCell<Vec<Notice>>>,
        location_calls: Rc<Cell<usize>>,
        renders: Rc<Cell<usize>>,
    }

    fn harness(position: Option<Coordinate>) -> Harness {
        let client = Rc::new(FakeClient::default());
        let notifier = RecordingNotifier::default();
        let location_calls = Rc::new(Cell::new(0));
        let renders = Rc::new(Cell::new(0));
        let state = ReactiveState::new(RouteViewState::new());
        {
            let renders = renders.clone();
            state.subscribe(move || renders.set(renders.get() + 1));
        }
        let vm = RouteViewModel::new(
            client.clone(),
            FakeLocation { position, calls: location_calls.clone() },
            notifier.clone(),
            state,
        );
        Harness {
            vm,
            client,
            notices: notifier.notices,
            location_calls,
            renders,
        }
    }

    #[test]
    fn test_mount_fills_start_location_once() {
        let h = harness(Some(Coordinate::new(51.505, -0.09)));

        block_on(h.vm.on_mount());
        assert_eq!(h.vm.state().snapshot().start_location, "51.505, -0.09");

        h.vm.set_start_location("typed");
        block_on(h.vm.on_mount());
        assert_eq!(h.location_calls.get(), 1);
        assert_eq!(h.vm.state().snapshot().start_location, "typed");
    }

    #[test]
    fn test_mount_without_permission_is_silent() {
        let h = harness(None);

        block_on(h.vm.on_mount());
        assert_eq!(h.vm.state().snapshot(), RouteViewState::new());
        assert!(h.notices.borrow().is_empty());
    }

    #[test]
    fn test_empty_location_never_requests_a_route() {
        let h = harness(None);

        let result = block_on(h.vm.calculate_route(""));
        assert_eq!(result, Err(ActionError::Validation(ValidationError::MissingRouteStart)));
        assert!(h.client.requests.borrow().is_empty());
        assert_eq!(
            *h.notices.borrow(),
            vec![Notice::Validation(ValidationError::MissingRouteStart)]
        );
        assert_eq!(
            h.notices.borrow()[0].to_string(),
            "Please enter the ambulance's starting location."
        );
    }

    #[test]
    fn test_successful_route_is_held_unmodified() {
        let h = harness(None);
        let response = sample_response("15");
        h.client.reply_route(Ok(response.clone()));
        h.vm.set_start_location("51.5, -0.1");

        block_on(h.vm.calculate_route("51.5, -0.1")).unwrap();

        let state = h.vm.state().snapshot();
        let outcome = state.route.as_ref().unwrap();
        assert_eq!(outcome.route, response.route);
        assert_eq!(outcome.traffic, response.traffic);
        assert_eq!(state.eta, Eta::new("15"));
        assert!(!state.shows_route_form());
        assert_eq!(*h.client.requests.borrow(), vec!["route?start=51.5, -0.1"]);
        assert!(h.notices.borrow().is_empty());
        assert_eq!(h.renders.get(), 1);
    }

    #[test]
    fn test_failed_route_keeps_state_and_notifies() {
        let h = harness(None);
        h.client.reply_route(Ok(sample_response("15")));
        block_on(h.vm.calculate_route("A")).unwrap();
        let before = h.vm.state().snapshot();

        h.client.reply_route(Err(ApiError::Http { status: 500, status_text: "Internal Server Error".into() }));
        let result = block_on(h.vm.calculate_route("B"));

        assert!(matches!(result, Err(ActionError::Api(ApiError::Http { status: 500, .. }))));
        assert_eq!(h.vm.state().snapshot(), before);
        assert_eq!(*h.notices.borrow(), vec![Notice::RouteFetchFailed]);
    }

    #[test]
    fn test_reset_after_route() {
        let h = harness(None);
        h.client.reply_route(Ok(sample_response("15")));
        h.client.reply_hospitals(Ok(vec![Hospital::named("Royal London Hospital")]));
        h.vm.set_start_location("51.5, -0.1");
        block_on(h.vm.calculate_route("51.5, -0.1")).unwrap();
        block_on(h.vm.search_nearby_hospitals("51.5, -0.1")).unwrap();
        h.vm.toggle_dark_mode();

        h.vm.reset_route();

        let state = h.vm.state().snapshot();
        assert_eq!(state.start_location, "");
        assert!(state.route.is_none());
        assert!(state.hospitals.is_empty());
        assert!(state.dark_mode);
        assert_eq!(state.eta, Eta::new("15"));
    }

    #[test]
    fn test_hospital_search() {
        let h = harness(None);
        h.client.reply_hospitals(Ok(vec![Hospital::named("A"), Hospital::named("B")]));

        block_on(h.vm.search_nearby_hospitals("London")).unwrap();

        assert_eq!(
            h.vm.state().snapshot().hospitals,
            vec![Hospital::named("A"), Hospital::named("B")]
        );
        assert_eq!(*h.client.requests.borrow(), vec!["nearby_hospitals?location=London"]);
    }

    #[test]
    fn test_failed_hospital_search_is_log_only() {
        let h = harness(None);
        h.client.reply_hospitals(Ok(vec![Hospital::named("A")]));
        block_on(h.vm.search_nearby_hospitals("London")).unwrap();

        h.client.reply_hospitals(Err(ApiError::Parse("missing field `hospitals`".into())));
        let result = block_on(h.vm.search_nearby_hospitals("London"));

        assert!(matches!(result, Err(ActionError::Api(ApiError::Parse(_)))));
        assert_eq!(h.vm.state().snapshot().hospitals, vec![Hospital::named("A")]);
        assert!(h.notices.borrow().is_empty());
    }

    #[test]
    fn test_empty_location_never_searches_hospitals() {
        let h = harness(None);

        let result = block_on(h.vm.search_nearby_hospitals(""));
        assert_eq!(result, Err(ActionError::Validation(ValidationError::MissingSearchLocation)));
        assert!(h.client.requests.borrow().is_empty());
        assert_eq!(h.notices.borrow()[0].to_string(), "Please enter a location first.");
    }

    #[test]
    fn test_toggle_dark_mode_twice() {
        let h = harness(None);
        h.vm.set_start_location("somewhere");
        let before = h.vm.state().snapshot();

        h.vm.toggle_dark_mode();
        assert!(h.vm.state().snapshot().dark_mode);
        h.vm.toggle_dark_mode();

        assert_eq!(h.vm.state().snapshot(), before);
        assert_eq!(h.renders.get(), 2);
    }

    #[test]
    fn test_typing_does_not_rerender() {
        let h = harness(None);
        h.vm.set_start_location("12");
        h.vm.set_start_location("123 Main St");
        assert_eq!(h.vm.state().snapshot().start_location, "123 Main St");
        assert_eq!(h.renders.get(), 0);
    }

    #[test]
    fn test_overlapping_requests_last_arrival_wins() {
        let h = harness(None);
        let first_reply = h.client.pending_route();
        let second_reply = h.client.pending_route();
        let first = sample_response("15");
        let mut second = sample_response("9");
        second.route.optimized_time = 7.0;

        let first_call = h.vm.calculate_route("first");
        let second_then_first = async {
            second_reply.send(Ok(second)).unwrap();
            h.vm.calculate_route("second").await.unwrap();
            assert_eq!(h.vm.state().snapshot().eta, Eta::new("9"));
            first_reply.send(Ok(first.clone())).unwrap();
        };

        let (first_result, ()) = block_on(join(first_call, second_then_first));
        first_result.unwrap();

        let state = h.vm.state().snapshot();
        assert_eq!(state.route.unwrap().route, first.route);
        assert_eq!(state.eta, Eta::new("15"));
        assert_eq!(*h.client.requests.borrow(), vec!["route?start=first", "route?start=second"]);
    }
}
