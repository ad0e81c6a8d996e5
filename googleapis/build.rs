#[cfg(feature = "generate")]
fn main() {
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .generate_default_stubs(true)
        .out_dir("src") // you can change the generated code's location
        .compile_protos(
            &[
                "googleapis/google/storage/v2/storage.proto",
                "googleapis/google/storage/control/v2/storage_control.proto",
                "googleapis/google/longrunning/operations.proto",
            ],
            &["googleapis"], // specify the root location to search proto dependencies
        )
        .unwrap();
}

#[cfg(not(feature = "generate"))]
fn main() {}
