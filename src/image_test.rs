use ndarray::Array5;

use super::*;

/// One frame, two channels of a 2×2×2 volume. Channel 1 isolates corner 7.
fn two_channel_cube() -> Array5<u8> {
    let mut data = Array5::<u8>::zeros((1, 2, 2, 2, 2));
    data[[0, 1, 1, 1, 1]] = 200;
    data
}

fn calibration(unit: &str) -> Calibration {
    Calibration {
        pixel_width: 0.5,
        pixel_height: 0.25,
        pixel_depth: 2.,
        unit: unit.to_owned(),
    }
}

#[test]
fn test_voxel_size_defaults_to_unit() {
    let size = effective_voxel_size(&calibration("µm"), false, Some(LengthUnit::Nanometer)).unwrap();
    assert_eq!(size, Vector::new(1., 1., 1.));
}

#[test]
fn test_voxel_size_uses_calibration() {
    let size = effective_voxel_size(&calibration("µm"), true, None).unwrap();
    assert_eq!(size, Vector::new(0.5, 0.25, 2.));
}

#[test]
fn test_unit_conversion_scales_all_axes() {
    let size = effective_voxel_size(&calibration("µm"), true, Some(LengthUnit::Nanometer)).unwrap();
    assert!((size.x - 500.).abs() < 1e-3);
    assert!((size.y - 250.).abs() < 1e-3);
    assert!((size.z - 2000.).abs() < 1e-3);
}

#[test]
fn test_unit_conversion_needs_known_unit() {
    let err = effective_voxel_size(&calibration("pixel"), true, Some(LengthUnit::Micrometer)).unwrap_err();
    assert_eq!(err, MarchingCubesError::UnknownLengthUnit { unit: "pixel".into() });

    // Without a forced unit the calibration unit is never interpreted.
    assert!(effective_voxel_size(&calibration("pixel"), true, None).is_ok());
}

#[test]
fn test_selects_channel() {
    let image = ImageStack::new(ImageData::Gray8(two_channel_cube()));
    let options = ImageMeshOptions::default().with_iso_level(100.);

    assert!(march_image(&image, &options).unwrap().is_empty());

    let options = options.with_channel_and_frame(1, 0);
    assert_eq!(march_image(&image, &options).unwrap().len(), 9);
}

#[test]
fn test_matches_direct_march() {
    let image = ImageStack::new(ImageData::Gray8(two_channel_cube()));
    let options = ImageMeshOptions::default()
        .with_iso_level(100.)
        .with_channel_and_frame(1, 0);

    let samples = [0u8, 0, 0, 0, 0, 0, 0, 200];
    let chunk = VolumeChunk::new(&samples, 2, 2, 2).unwrap();
    let direct = march(&chunk, 100, &MarchingCubesConfig::default());

    assert_eq!(march_image(&image, &options).unwrap(), direct);
}

#[test]
fn test_physical_sizes_scale_output() {
    let image = ImageStack::new(ImageData::Gray8(two_channel_cube())).with_calibration(calibration("mm"));
    let options = ImageMeshOptions::default()
        .with_iso_level(100.)
        .with_channel_and_frame(1, 0)
        .with_physical_sizes(None);

    let vertices = march_image(&image, &options).unwrap();
    // Edge 5 crossing: (sx, sy / 2, sz) - 0.5
    assert_eq!(&vertices[..3], &[0., -0.375, 1.5]);
}

#[test]
fn test_out_of_range_selection() {
    let image = ImageStack::new(ImageData::Gray8(two_channel_cube()));

    let options = ImageMeshOptions::default().with_channel_and_frame(2, 0);
    assert_eq!(
        march_image(&image, &options),
        Err(MarchingCubesError::ChannelOutOfRange { channel: 2, channels: 2 })
    );

    let options = ImageMeshOptions::default().with_channel_and_frame(0, 1);
    assert_eq!(
        march_image(&image, &options),
        Err(MarchingCubesError::FrameOutOfRange { frame: 1, frames: 1 })
    );
}

#[test]
fn test_rgb_is_unsupported() {
    let image = ImageStack::new(ImageData::Rgb(Array5::zeros((1, 1, 2, 2, 2))));
    assert_eq!(
        march_image(&image, &ImageMeshOptions::default()),
        Err(MarchingCubesError::UnsupportedSampleKind { kind: "rgb" })
    );
}

#[test]
fn test_iso_level_above_byte_range_meshes_nothing() {
    let mut data = Array5::<u8>::zeros((1, 1, 2, 2, 2));
    data[[0, 0, 1, 1, 1]] = 255;
    let image = ImageStack::new(ImageData::Gray8(data));

    let options = ImageMeshOptions::default().with_iso_level(300.);
    assert!(march_image(&image, &options).unwrap().is_empty());
}

#[test]
fn test_negative_iso_level_wraps_for_bytes() {
    let mut data = Array5::<u8>::zeros((1, 1, 2, 2, 2));
    data[[0, 0, 1, 1, 1]] = 5;
    let image = ImageStack::new(ImageData::Gray8(data));

    // -5 wraps to 65531.
    let options = ImageMeshOptions::default().with_iso_level(-5.);
    assert!(march_image(&image, &options).unwrap().is_empty());

    // 65538 wraps to 2.
    let options = ImageMeshOptions::default().with_iso_level(65_538.);
    assert_eq!(march_image(&image, &options).unwrap().len(), 9);
}

#[test]
fn test_gray16_iso_level_wraps() {
    let mut data = Array5::<i16>::zeros((1, 1, 2, 2, 2));
    data[[0, 0, 1, 1, 1]] = -30_000;
    let image = ImageStack::new(ImageData::Gray16(data));

    // 40000 wraps to -25536, so every corner but the last exceeds it.
    let options = ImageMeshOptions::default().with_iso_level(40_000.);
    assert_eq!(march_image(&image, &options).unwrap().len(), 9);
}

#[test]
fn test_integer_iso_levels_truncate_then_wrap() {
    assert_eq!(gray8_iso_level(2.9), 2);
    assert_eq!(gray8_iso_level(-0.9), 0);
    assert_eq!(gray8_iso_level(-5.), u8::MAX);
    assert_eq!(gray8_iso_level(65_536. + 7.), 7);
    assert_eq!(gray8_iso_level(f64::NAN), 0);

    assert_eq!(gray16_iso_level(-100.7), -100);
    assert_eq!(gray16_iso_level(40_000.), -25_536);
    // Saturates at i32::MIN first, whose low 16 bits are zero.
    assert_eq!(gray16_iso_level(-1e12), 0);
}

#[test]
fn test_gray16_is_signed() {
    let mut data = Array5::<i16>::zeros((1, 1, 2, 2, 2));
    data[[0, 0, 1, 1, 1]] = -20_000;
    let image = ImageStack::new(ImageData::Gray16(data));

    // Only the negative corner is below the iso-level: the complement of config 64.
    let options = ImageMeshOptions::default().with_iso_level(-100.);
    assert_eq!(march_image(&image, &options).unwrap().len(), 9);

    let options = ImageMeshOptions::default().with_iso_level(100.);
    assert!(march_image(&image, &options).unwrap().is_empty());
}

#[test]
fn test_z_offset_skips_lower_planes() {
    let mut data = Array5::<f32>::zeros((1, 1, 3, 2, 2));
    data[[0, 0, 0, 1, 1]] = 1.;
    data[[0, 0, 2, 1, 1]] = 1.;
    let image = ImageStack::new(ImageData::Gray32(data));

    let all = ImageMeshOptions::default().with_iso_level(0.5);
    assert_eq!(march_image(&image, &all).unwrap().len(), 2 * 9);

    let upper = all.clone().with_z_offset(1);
    let vertices = march_image(&image, &upper).unwrap();
    assert_eq!(vertices.len(), 9);
    assert!(vertices.chunks_exact(3).all(|v| v[2] >= 0.5));
}
