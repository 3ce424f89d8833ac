// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

/// Embed git metadata for `comelint::version`. Outside a git checkout vergen
/// emits placeholder values instead of failing the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .git_dirty(false)
        .emit()?;
    Ok(())
}
