use filecodec::FileCodec;
use math::PrimeField;

fn main() {
    let message = b"example payload travelling through GF(2^255 - 19)";
    let codec = FileCodec::with_default_config(PrimeField::curve25519())
        .expect("default config is valid");

    let poly = codec.encode(message);
    println!("{} bytes -> degree {} polynomial", message.len(), poly.degree());

    let decoded = codec.decode(&poly).expect("decoding should succeed");
    println!(
        "decoded {} bytes ({} whole chunks of {})",
        decoded.len(),
        poly.len(),
        codec.config().chunk_size
    );

    let value = poly.evaluate(&codec.field().element(2u64));
    println!("m(2) = {value}");
}
