fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Client stubs are used by the integration tests
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile(&["../proto/sso.proto"], &["../proto"])?;

    println!("cargo:rerun-if-changed=migrations");

    Ok(())
}
