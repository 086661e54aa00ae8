//! Generates the gRPC server and client from `proto/questionary.proto`.

use std::error::Error;

#[expect(clippy::print_stdout, reason = "cargo reads build directives from stdout")]
fn main() -> Result<(), Box<dyn Error>> {
    let protoc = protoc_bin_vendored::protoc_bin_path()?;
    let well_known = protoc_bin_vendored::include_path()?;

    let mut config = prost_build::Config::new();
    config.protoc_executable(protoc);

    println!("cargo:rerun-if-changed=proto/questionary.proto");
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos_with_config(
            config,
            &["proto/questionary.proto"],
            &[std::path::PathBuf::from("proto"), well_known],
        )?;
    Ok(())
}
