use service::customer::CustomerService;

/// Shared handler state; cheap to clone.
#[derive(Clone)]
pub struct ServerState {
    pub customers: CustomerService,
}

impl ServerState {
    pub fn new(customers: CustomerService) -> Self { Self { customers } }
}
