use std::path::Path;
use std::process::Command;

const TAILWIND_INPUT: &str = "tailwind.css";
const TAILWIND_OUTPUT: &str = "assets/tailwind.css";

fn main() {
    // Utility classes live in the header components; rebuild when they change
    println!("cargo:rerun-if-changed={}", TAILWIND_INPUT);
    println!("cargo:rerun-if-changed=src/ui");
    println!("cargo:rerun-if-changed=src/view.rs");

    let manifest_dir = env!("CARGO_MANIFEST_DIR");

    // Run tailwindcss to generate CSS (using locally installed version)
    let output = Command::new("npx")
        .arg("tailwindcss")
        .args(["-i", TAILWIND_INPUT, "-o", TAILWIND_OUTPUT, "--minify"])
        .current_dir(manifest_dir)
        .output();

    let has_previous_build = Path::new(manifest_dir).join(TAILWIND_OUTPUT).exists();

    match output {
        Ok(output) if output.status.success() => {}
        Ok(output) => {
            println!("cargo:warning=Failed to generate Tailwind CSS");
            println!(
                "cargo:warning=STDERR: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Err(e) => {
            println!("cargo:warning=Failed to run tailwindcss: {}", e);
            if has_previous_build {
                println!("cargo:warning=Keeping existing {}", TAILWIND_OUTPUT);
            }
        }
    }
}
