use super::*;
use std::path::PathBuf;

use image::Rgb;

use crate::foundation::core::Animation;

const COLORS: [[u8; 3]; 5] = [
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 0],
    [0, 255, 255],
];

fn frame_set(name: &str, sizes: &[(u32, u32)]) -> FrameSet {
    let dir = PathBuf::from("target").join("unit_compose").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let mut paths = Vec::new();
    for (i, &(w, h)) in sizes.iter().enumerate() {
        let path = dir.join(format!("frame_{i}.png"));
        RgbImage::from_pixel(w, h, Rgb(COLORS[i]))
            .save(&path)
            .unwrap();
        paths.push(path);
    }
    let (w, h) = sizes[0];
    FrameSet {
        paths,
        animation: Animation::new(w, h, sizes.len() as u64, 24.0).unwrap(),
    }
}

#[test]
fn frames_are_tiled_row_major_and_excess_dropped() {
    let set = frame_set("row_major", &[(4, 3); 5]);
    let atlas = compose_atlas(&set, Layout::new(2, 2)).unwrap();
    assert_eq!(atlas.dimensions(), (8, 6));
    assert_eq!(atlas.get_pixel(0, 0), &Rgb(COLORS[0]));
    assert_eq!(atlas.get_pixel(4, 0), &Rgb(COLORS[1]));
    assert_eq!(atlas.get_pixel(0, 3), &Rgb(COLORS[2]));
    assert_eq!(atlas.get_pixel(7, 5), &Rgb(COLORS[3]));
    assert!(atlas.pixels().all(|p| *p != Rgb(COLORS[4])));
}

#[test]
fn oversized_frames_are_cropped_to_first_frame() {
    let set = frame_set("crop", &[(4, 3), (9, 9)]);
    let atlas = compose_atlas(&set, Layout::new(2, 1)).unwrap();
    assert_eq!(atlas.dimensions(), (8, 3));
    assert_eq!(atlas.get_pixel(3, 2), &Rgb(COLORS[0]));
    assert_eq!(atlas.get_pixel(4, 0), &Rgb(COLORS[1]));
    assert_eq!(atlas.get_pixel(7, 2), &Rgb(COLORS[1]));
}

#[test]
fn sparse_cells_stay_black() {
    let set = frame_set("sparse", &[(2, 2); 3]);
    let atlas = compose_atlas(&set, Layout::new(2, 2)).unwrap();
    assert_eq!(atlas.get_pixel(3, 3), &Rgb([0, 0, 0]));
}

#[test]
fn degenerate_layout_is_rejected() {
    let set = frame_set("degenerate", &[(2, 2)]);
    let err = compose_atlas(&set, Layout::new(0, 1)).unwrap_err();
    assert!(matches!(err, PackError::DegenerateLayout { .. }));
}

#[test]
fn write_atlas_creates_parent_dirs() {
    let out = PathBuf::from("target")
        .join("unit_compose")
        .join("write")
        .join("nested")
        .join("atlas.png");
    let _ = std::fs::remove_dir_all(out.parent().unwrap());
    let atlas = RgbImage::from_pixel(5, 7, Rgb([1, 2, 3]));
    write_atlas(&atlas, &out).unwrap();
    assert_eq!(image::image_dimensions(&out).unwrap(), (5, 7));
}
