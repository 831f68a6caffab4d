use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub jwt_secret: String,
    pub token_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("FP_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .expect("Invalid FP_LISTEN_ADDR");
        let jwt_secret =
            std::env::var("FP_JWT_SECRET").unwrap_or_else(|_| "finpulse-dev-secret".to_string());
        let ttl_secs: u64 = std::env::var("FP_TOKEN_TTL_SECS")
            .unwrap_or_else(|_| "86400".into())
            .parse()
            .unwrap_or(86400);
        Self {
            listen_addr,
            jwt_secret,
            token_ttl: Duration::from_secs(ttl_secs),
        }
    }
}
