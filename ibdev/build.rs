use std::collections::HashSet;
use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let lib = match pkg_config::Config::new().statik(false).probe("libibverbs") {
        Ok(lib) => lib,
        Err(err) => {
            println!("cargo:warning=libibverbs not found, system device list disabled: {err}");
            return;
        }
    };

    let mut include_paths = lib.include_paths.into_iter().collect::<HashSet<_>>();
    include_paths.insert(PathBuf::from("/usr/include"));

    bindgen::Builder::default()
        .clang_args(include_paths.iter().map(|p| format!("-I{}", p.display())))
        .header_contents("header.h", "#include <infiniband/verbs.h>")
        .derive_copy(true)
        .derive_debug(true)
        .derive_default(true)
        .generate_comments(false)
        .prepend_enum_name(false)
        .size_t_is_usize(true)
        .translate_enum_integer_types(true)
        .layout_tests(false)
        .default_enum_style(bindgen::EnumVariation::Rust {
            non_exhaustive: false,
        })
        .allowlist_type("ibv_device")
        .allowlist_function("ibv_free_device_list")
        .allowlist_function("ibv_get_device_guid")
        .allowlist_function("ibv_get_device_list")
        .allowlist_function("ibv_get_device_name")
        .generate()
        .expect("Unable to generate bindings")
        .write_to_file(PathBuf::from(env::var("OUT_DIR").unwrap()).join("bindings.rs"))
        .expect("Couldn't write bindings!");

    println!("cargo:rustc-cfg=ibverbs");
}
