// Integration tests will call this multiple times; ignore the error.
pub fn setup() {
    if let Err(_err) = env_logger::try_init() {}
}
