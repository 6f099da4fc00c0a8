// Build script for flutter_rust_bridge code generation
//
// Dart bindings are generated with the CLI tool, not from this script:
//   flutter_rust_bridge_codegen generate
//
// The generated Dart file is lib/bridge/api.dart.

fn main() {
    // Regenerate bindings whenever the exported API changes
    println!("cargo:rerun-if-changed=src/api.rs");
    println!("cargo:rerun-if-changed=src/api/types.rs");
}
