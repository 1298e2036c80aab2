use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata backs `toolchain-env --version`
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
