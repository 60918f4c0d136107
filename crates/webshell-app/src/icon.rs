//! Window icon loading from PNG files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use webshell_common::ShellError;
use winit::window::Icon;

/// Decode a PNG into a window icon.
pub fn load_icon(path: &Path) -> Result<Icon, ShellError> {
    let (rgba, width, height) = decode_rgba(path)?;
    Icon::from_rgba(rgba, width, height)
        .map_err(|e| ShellError::Window(format!("bad icon {}: {e}", path.display())))
}

/// Decode any 8/16-bit PNG into tightly packed RGBA8.
pub fn decode_rgba(path: &Path) -> Result<(Vec<u8>, u32, u32), ShellError> {
    let decode_err =
        |e: png::DecodingError| ShellError::Window(format!("bad icon {}: {e}", path.display()));

    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder.read_info().map_err(decode_err)?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(decode_err)?;
    let bytes = &buf[..info.buffer_size()];

    let rgba = to_rgba(info.color_type, bytes).ok_or_else(|| {
        ShellError::Window(format!(
            "unsupported icon color type {:?}: {}",
            info.color_type,
            path.display()
        ))
    })?;
    Ok((rgba, info.width, info.height))
}

/// Widen 8-bit samples of `color` to RGBA. `None` for indexed data.
fn to_rgba(color: png::ColorType, bytes: &[u8]) -> Option<Vec<u8>> {
    let rgba = match color {
        png::ColorType::Rgba => bytes.to_vec(),
        png::ColorType::Rgb => bytes
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 0xFF])
            .collect(),
        png::ColorType::GrayscaleAlpha => bytes
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => bytes.iter().flat_map(|&g| [g, g, g, 0xFF]).collect(),
        png::ColorType::Indexed => return None,
    };
    Some(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path, color: png::ColorType, width: u32, height: u32, data: &[u8]) {
        let file = File::create(path).unwrap();
        let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
    }

    #[test]
    fn rgb_gets_opaque_alpha() {
        assert_eq!(
            to_rgba(png::ColorType::Rgb, &[1, 2, 3, 4, 5, 6]),
            Some(vec![1, 2, 3, 255, 4, 5, 6, 255])
        );
    }

    #[test]
    fn grayscale_alpha_is_widened() {
        assert_eq!(
            to_rgba(png::ColorType::GrayscaleAlpha, &[9, 128]),
            Some(vec![9, 9, 9, 128])
        );
    }

    #[test]
    fn indexed_is_unsupported() {
        assert_eq!(to_rgba(png::ColorType::Indexed, &[0]), None);
    }

    #[test]
    fn decodes_rgba_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        let pixels: Vec<u8> = (0..2 * 2 * 4).map(|i| i as u8).collect();
        write_png(&path, png::ColorType::Rgba, 2, 2, &pixels);

        let (rgba, w, h) = decode_rgba(&path).unwrap();
        assert_eq!((w, h), (2, 2));
        assert_eq!(rgba, pixels);
        assert!(load_icon(&path).is_ok());
    }

    #[test]
    fn decodes_rgb_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        write_png(&path, png::ColorType::Rgb, 1, 1, &[10, 20, 30]);

        let (rgba, _, _) = decode_rgba(&path).unwrap();
        assert_eq!(rgba, vec![10, 20, 30, 255]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = decode_rgba(Path::new("/nonexistent/icon.png")).unwrap_err();
        assert!(matches!(err, ShellError::Io(_)));
    }

    #[test]
    fn non_png_is_window_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        std::fs::write(&path, b"not a png").unwrap();

        let err = decode_rgba(&path).unwrap_err();
        assert!(matches!(err, ShellError::Window(_)));
    }
}
