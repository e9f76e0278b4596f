use application::countdown_channel::SharedCountdownChannel;
use application::countdown_tick_handler::CountdownTickHandler;
use application::notification_state::SharedNotificationState;
use application::release_check_tick_handler::ReleaseCheckTickHandler;
use application::release_status::ReleaseStatusService;
use application_ports::countdown_tick_handler::CountdownTickHandlerPort;
use application_ports::release_check_tick_handler::ReleaseCheckTickHandlerPort;
use application_ports::release_status::ReleaseStatusPort;
use domain::countdown::CountdownTarget;
use domain::product::Product;
use infrastructure::clock::SystemClock;
use infrastructure::store_front::SteamStoreAdapter;
use presentation::application_ports::Locator;
use std::sync::Arc;
use tracing::instrument;

#[derive(Clone)]
pub struct ApplicationPortLocator {
    pub(crate) product: Product,
    pub(crate) target: CountdownTarget,

    pub(crate) countdown_channel: Arc<SharedCountdownChannel>,
    pub(crate) store_front_adapter: Arc<SteamStoreAdapter>,
    pub(crate) clock: Arc<SystemClock>,
    pub(crate) notification_state: Arc<SharedNotificationState>,

    pub(crate) release_status_adapter: Arc<ReleaseStatusService>,
}

impl Locator for ApplicationPortLocator {
    #[instrument(level = "trace", skip(self))]
    fn create_countdown_tick_handler_port(&self) -> impl CountdownTickHandlerPort + Send {
        CountdownTickHandler::new(
            self.countdown_channel.clone(),
            self.clock.clone(),
            self.notification_state.clone(),
            self.product.clone(),
            self.target,
        )
    }

    #[instrument(level = "trace", skip(self))]
    fn create_release_check_tick_handler_port(&self) -> impl ReleaseCheckTickHandlerPort + Send {
        ReleaseCheckTickHandler::new(
            self.store_front_adapter.clone(),
            self.clock.clone(),
            self.notification_state.clone(),
            self.countdown_channel.clone(),
            self.product.clone(),
            self.target,
        )
    }

    #[instrument(level = "trace", skip(self))]
    fn get_release_status_port(&self) -> &(dyn ReleaseStatusPort + Send + Sync) {
        &*self.release_status_adapter
    }
}
