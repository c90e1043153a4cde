#[cfg(target_arch = "wasm32")]
pub fn main() {
    quizmaster::start();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
