// A build script is included as parts of the workspace-hack's build
// dependencies may be built by it.
fn main() {}
