//! Generador de claves VAPID (ejecutar una sola vez).
//!
//! Imprime un par de claves P-256 listo para pegar en el entorno:
//! la pública como punto SEC1 sin comprimir y la privada como escalar
//! crudo, ambas en base64 URL-safe sin relleno.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::SecretKey;
use rand_core::OsRng;

fn main() {
    let secret = SecretKey::random(&mut OsRng);
    let public = secret.public_key().to_encoded_point(false);

    println!("VAPID_PUBLIC_KEY={}", URL_SAFE_NO_PAD.encode(public.as_bytes()));
    println!("VAPID_PRIVATE_KEY={}", URL_SAFE_NO_PAD.encode(secret.to_bytes()));
}
