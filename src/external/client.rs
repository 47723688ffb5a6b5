use std::time::Duration;

/// Builds the HTTP client shared by a process's senders.
///
/// The client is constructed explicitly and handed to each sender at
/// construction time; nothing in this crate holds a process-global
/// instance, so tests can substitute their own transport.
///
/// # Features
/// - **Connection pooling**: reuses TCP connections across sends
/// - **HTTP/2**: adaptive window sizing and keep-alive
/// - **Compression**: gzip, deflate, brotli, and zstd response decoding
/// - **Timeouts**: 30s request timeout, 10s connect timeout
/// - **Security**: Rustls for TLS
///
/// # Example
/// ```ignore
/// let client = build_http_client();
/// let provider = FcmProvider::from_settings(settings, client)?;
/// ```
pub fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        // Connection pooling
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        // HTTP/2 settings
        .http2_adaptive_window(true)
        .http2_keep_alive_interval(Duration::from_secs(10))
        .http2_keep_alive_timeout(Duration::from_secs(20))
        // Enable compression (gzip, deflate, brotli, zstd)
        .gzip(true)
        .deflate(true)
        .brotli(true)
        .zstd(true)
        // Security
        .use_rustls_tls()
        .build()
        .expect("Failed to build HTTP client")
}
