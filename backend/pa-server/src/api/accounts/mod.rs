pub mod accounts;
pub mod set_staff_status_request;
