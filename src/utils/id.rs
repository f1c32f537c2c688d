/// Generates a request identifier.
///
/// The identifier is 16 characters drawn from uppercase letters and digits via
/// `nanoid`, short enough to read in a log line and long enough not to collide
/// within a server's lifetime.
///
/// # Examples
/// ```
/// use oanda_mcp_server::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 16);
/// ```
pub fn request_id() -> String {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    nanoid::nanoid!(16, &alphabet)
}
