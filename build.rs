use std::env;
use std::fs;
use std::path::PathBuf;

const ASSETS: [&str; 2] = ["index.js", "package.json"];

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR missing"));

    for name in ASSETS {
        let source = format!("assets/{name}");
        println!("cargo:rerun-if-changed={source}");

        let contents =
            fs::read_to_string(&source).unwrap_or_else(|err| panic!("failed to read {source}: {err}"));
        // A CRLF checkout must not leak into the files we write.
        let normalized = contents.replace("\r\n", "\n");

        fs::write(out_dir.join(name), normalized)
            .unwrap_or_else(|err| panic!("failed to write bundled {name}: {err}"));
    }
}
