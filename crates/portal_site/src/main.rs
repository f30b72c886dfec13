//! Binary entrypoint for the browser-hosted portal glue.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    portal_site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `portal_site_app` for wasm32 with the `csr` feature and load it from the portal pages."
    );
}
