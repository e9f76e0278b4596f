use application_ports::countdown_tick_handler::CountdownTickHandlerPort;
use application_ports::release_check_tick_handler::ReleaseCheckTickHandlerPort;
use application_ports::release_status::ReleaseStatusPort;

pub trait Locator {
    fn create_countdown_tick_handler_port(&self) -> impl CountdownTickHandlerPort + Send;
    fn create_release_check_tick_handler_port(&self) -> impl ReleaseCheckTickHandlerPort + Send;
    fn get_release_status_port(&self) -> &(dyn ReleaseStatusPort + Send + Sync);
}
