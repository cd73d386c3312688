use rand::SeedableRng;
use rand::rngs::StdRng;
use schnorr_sig::{
    Engine, EngineConfig, EngineKind, PublicKey, RandomnessMode, SchnorrEngine, Signature,
    tagged_hash,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut rng = StdRng::seed_from_u64(42);
    let reference =
        Engine::from_config(&EngineConfig::new(EngineKind::Reference, RandomnessMode::Os));
    let accelerated =
        Engine::from_config(&EngineConfig::new(EngineKind::Accelerated, RandomnessMode::Os));

    let keypair = reference.generate_keypair(&mut rng).expect("keygen");
    let msg = tagged_hash("example/event", b"hello schnorr");

    for signer in [&reference, &accelerated] {
        let sig = signer.sign_fresh(&keypair.secret, &msg).expect("sign");

        let pk_bytes = bincode::serialize(&keypair.public).expect("serialize pk");
        let sig_bytes = bincode::serialize(&sig).expect("serialize sig");
        let pk2: PublicKey = bincode::deserialize(&pk_bytes).expect("deserialize pk");
        let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");
        assert_eq!(pk2, keypair.public);
        assert_eq!(sig2, sig);

        for verifier in [&reference, &accelerated] {
            let ok = verifier.verify(&pk2, &msg, &sig2).expect("verify");
            assert!(ok);
            println!("{} -> {}: {}", signer.name(), verifier.name(), sig2);
        }
    }

    println!("public key {}", keypair.public);
}
