use application::role_assignment::RoleAssignmentService;
use application_ports::member_joined::MemberJoinedPort;
use presentation::application_ports::Locator;
use std::sync::Arc;
use tracing::instrument;

#[derive(Clone)]
pub struct ApplicationPortLocator {
    pub(crate) member_joined_adapter: Arc<RoleAssignmentService>,
}

impl ApplicationPortLocator {
    #[instrument(level = "trace", skip_all)]
    pub fn new(member_joined_adapter: Arc<RoleAssignmentService>) -> Self {
        Self {
            member_joined_adapter,
        }
    }
}

impl Locator for ApplicationPortLocator {
    #[instrument(level = "trace", skip(self))]
    fn get_member_joined_port(&self) -> &(dyn MemberJoinedPort + Send + Sync) {
        &*self.member_joined_adapter
    }
}
