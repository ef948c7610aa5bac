use tracing::debug;

use crate::error::Result;
use crate::frame::Frame;
use crate::io::fits::read_frame;
use crate::io::template::PathTemplate;

/// Load `count` frames, substituting indices `0..count` into the template.
///
/// Fail-fast: the first missing or undecodable file aborts the whole load.
/// There is no partial-stack recovery.
pub fn load_sequence(template: &PathTemplate, count: usize) -> Result<Vec<Frame>> {
    load_stack(template, (0..count).map(|i| i as u32))
}

/// Load one frame per index, preserving input order.
pub fn load_stack<I>(template: &PathTemplate, indices: I) -> Result<Vec<Frame>>
where
    I: IntoIterator<Item = u32>,
{
    load_stack_with_progress(template, indices, |_| {})
}

/// Like [`load_stack`], invoking `on_frame` with the number of frames
/// loaded so far after each read.
pub fn load_stack_with_progress<I, F>(
    template: &PathTemplate,
    indices: I,
    mut on_frame: F,
) -> Result<Vec<Frame>>
where
    I: IntoIterator<Item = u32>,
    F: FnMut(usize),
{
    let mut frames = Vec::new();
    for (position, index) in indices.into_iter().enumerate() {
        let path = template.resolve(index);
        let mut frame = read_frame(&path)?;
        frame.metadata.frame_index = position;
        debug!(path = %path.display(), position, "loaded frame");
        frames.push(frame);
        on_frame(frames.len());
    }
    Ok(frames)
}
