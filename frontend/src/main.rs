fn main() {
    #[cfg(target_arch = "wasm32")]
    tibet_tourism_frontend::start();
}
