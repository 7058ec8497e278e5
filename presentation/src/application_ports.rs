use application_ports::member_joined::MemberJoinedPort;

pub trait Locator {
    fn get_member_joined_port(&self) -> &(dyn MemberJoinedPort + Send + Sync);
}
