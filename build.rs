use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/glue.c");

    let pipewire = pkg_config::Config::new()
        .cargo_metadata(true)
        .probe("libpipewire-0.3")?;

    cc::Build::new()
        .flag("-Wall")
        .flag("-Wextra")
        .includes(&pipewire.include_paths)
        .file("src/glue.c")
        .compile("pwglue_c");

    Ok(())
}
