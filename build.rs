fn main() {
    println!("cargo:rerun-if-changed=proto/identity_verification.proto");

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/identity_verification.proto"], &["proto"])
        .expect("failed to compile identity verification proto");
}
