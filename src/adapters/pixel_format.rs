//! Pixel format helpers for presentation adapters.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("frame length {dst_len} does not match pixel buffer length {src_len}")]
pub struct FrameSizeMismatch {
    pub src_len: usize,
    pub dst_len: usize,
}

/// Copies an RGBA8 buffer into an RGBA8 frame of the same size.
pub fn copy_rgba_frame(src: &[u8], dst: &mut [u8]) -> Result<(), FrameSizeMismatch> {
    if src.len() != dst.len() {
        return Err(FrameSizeMismatch {
            src_len: src.len(),
            dst_len: dst.len(),
        });
    }

    dst.copy_from_slice(src);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_rgba_frame_known_values() {
        let src = vec![
            255, 0, 0, 255, // red
            0, 255, 0, 255, // green
        ];
        let mut dst = vec![0; 8];

        copy_rgba_frame(&src, &mut dst).unwrap();

        assert_eq!(dst, src);
    }

    #[test]
    fn test_copy_rgba_frame_empty_buffers() {
        let mut dst: Vec<u8> = vec![];

        assert!(copy_rgba_frame(&[], &mut dst).is_ok());
    }

    #[test]
    fn test_copy_rgba_frame_rejects_size_mismatch() {
        let src = vec![1, 2, 3, 4];
        let mut dst = vec![9; 8];

        let result = copy_rgba_frame(&src, &mut dst);

        assert_eq!(
            result,
            Err(FrameSizeMismatch {
                src_len: 4,
                dst_len: 8
            })
        );
        assert!(dst.iter().all(|&b| b == 9));
    }
}
