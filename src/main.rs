//! Browser entry point (`trunk serve --features csr`).

fn main() {
    #[cfg(feature = "csr")]
    portfolio::mount();
}
