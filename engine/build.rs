fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/decisions.proto"); // Rerun if .proto file changes
    tonic_build::configure()
        .build_server(true) // Generate server code
        .build_client(true) // Client code is used by the service tests and by anyone scripting the engine
        .compile(
            &["proto/decisions.proto"], // Path to .proto files relative to engine crate root
            &["proto"],                 // Include path for .proto files
        )?;
    Ok(())
}
