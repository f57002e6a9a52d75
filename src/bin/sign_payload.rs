use std::io::Read;

use docuhook::config::Config;
use docuhook::connect::verify::SignatureVerifier;

// Prints the signature header value for a body, for poking the endpoint with curl.
// Usage: sign_payload [FILE]   (reads stdin when FILE is omitted)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let verifier = SignatureVerifier::from_config(&config.connect);

    let body = match std::env::args().nth(1) {
        Some(path) => std::fs::read(&path)?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    let signature = verifier
        .sign(&body)
        .map_err(|e| anyhow::anyhow!("cannot key hmac: {e}"))?;
    println!("{}: {}", config.connect.signature_header, signature);

    Ok(())
}
