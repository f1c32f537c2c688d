/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// HTTP transport with rate limiting, retry and Oanda error decoding
pub mod http;
/// Request models, both the MCP facing bodies and the Oanda payloads
pub mod requests;
/// Response models from the Oanda API and the MCP success envelope
pub mod responses;
/// Retry configuration for HTTP requests
pub mod retry;
