use std::path::Path;

fn main() {
    let proto = Path::new("proto/gateway/v1/gateway.proto");
    let generated = Path::new("src/generated/gateway.v1.rs");

    println!("cargo:rerun-if-changed={}", proto.display());
    println!("cargo:rerun-if-changed={}", generated.display());

    if !generated.exists() {
        panic!(
            "missing generated gRPC source '{}'; commit generated artifacts",
            generated.display()
        );
    }
}
