fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Supply a protoc binary from the vendored crate when one isn't on PATH.
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(protoc) = protoc_bin_vendored::protoc_bin_path() {
            std::env::set_var("PROTOC", protoc);
        }
    }

    // Compile product service proto
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/product.proto"], &["proto/"])?;

    Ok(())
}
