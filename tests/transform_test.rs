//! End-to-end tests of the recolor library API.

mod common;

use common::{assertions, test_data};
use image::{DynamicImage, GrayImage, RgbImage};
use pretty_assertions::assert_eq;

use recolor::{apply_colormap, decode_image, Catalog, RecolorError};

#[test]
fn test_every_catalog_name_applies() {
    let catalog = Catalog::builtin();
    let input = DynamicImage::ImageRgb8(test_data::checkerboard(
        13,
        7,
        2,
        [200, 30, 90],
        [10, 240, 120],
    ));

    for name in catalog.list_all() {
        let (colored, info) = apply_colormap(&catalog, &input, name)
            .unwrap_or_else(|e| panic!("{} failed: {}", name, e));
        assert_eq!(colored.dimensions(), (13, 7), "dimensions for {}", name);
        assert!(info.starts_with(&format!("Colormap: {}\n", name)));
    }
}

#[test]
fn test_reversed_names_apply() {
    let catalog = Catalog::builtin();
    let input = DynamicImage::ImageLuma8(test_data::linear_gradient(16, 2));

    for name in catalog.list_all() {
        let reversed = format!("{}_r", name);
        assert!(
            apply_colormap(&catalog, &input, &reversed).is_ok(),
            "{} should resolve",
            reversed
        );
    }
}

#[test]
fn test_apply_is_idempotent() {
    let catalog = Catalog::builtin();
    let input = DynamicImage::ImageLuma8(test_data::linear_gradient(256, 3));

    let (first, first_info) = apply_colormap(&catalog, &input, "magma").unwrap();
    let (second, second_info) = apply_colormap(&catalog, &input, "magma").unwrap();

    assert_eq!(first.as_raw(), second.as_raw());
    assert_eq!(first_info, second_info);
}

#[test]
fn test_black_image_through_gray() {
    let catalog = Catalog::builtin();
    let input = DynamicImage::ImageRgb8(RgbImage::new(2, 2));

    let (colored, info) = apply_colormap(&catalog, &input, "gray").unwrap();

    assertions::assert_uniform(&colored, [0, 0, 0]);
    assert!(info.contains("Category: Sequential (2)"));
    assert!(info.contains(
        "Recommended use: Representing ordered data that progresses from low to high"
    ));
}

#[test]
fn test_alpha_is_ignored() {
    let catalog = Catalog::builtin();
    let opaque = DynamicImage::ImageRgba8(test_data::solid_rgba(3, 3, [90, 140, 200, 255]));
    let clear = DynamicImage::ImageRgba8(test_data::solid_rgba(3, 3, [90, 140, 200, 0]));

    let (a, _) = apply_colormap(&catalog, &opaque, "plasma").unwrap();
    let (b, _) = apply_colormap(&catalog, &clear, "plasma").unwrap();
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn test_unknown_colormap() {
    let catalog = Catalog::builtin();
    let input = DynamicImage::ImageLuma8(GrayImage::new(2, 2));

    match apply_colormap(&catalog, &input, "not_a_real_cmap") {
        Err(RecolorError::UnknownColormap { name }) => assert_eq!(name, "not_a_real_cmap"),
        other => panic!("expected UnknownColormap, got {:?}", other.map(|(_, info)| info)),
    }
}

#[test]
fn test_invalid_images() {
    let catalog = Catalog::builtin();
    let empty = DynamicImage::ImageLuma8(GrayImage::new(0, 4));

    assert!(matches!(
        apply_colormap(&catalog, &empty, "viridis"),
        Err(RecolorError::InvalidImage { .. })
    ));
    assert!(matches!(
        decode_image(b"GIF89a but not really"),
        Err(RecolorError::InvalidImage { .. })
    ));
}

#[test]
fn test_category_lookup() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.category_of("viridis"), "Perceptually Uniform Sequential");
    assert_eq!(catalog.category_of("coolwarm"), "Diverging");
    assert_eq!(catalog.category_of("bogus"), "Unknown");
    assert_eq!(catalog.category_of(""), "Unknown");
}

#[test]
fn test_decoded_upload_matches_in_memory_image() {
    let catalog = Catalog::builtin();
    let gradient = test_data::linear_gradient(32, 4);
    let decoded = decode_image(&test_data::png_bytes(gradient.clone())).unwrap();

    let (from_upload, _) = apply_colormap(&catalog, &decoded, "jet").unwrap();
    let (direct, _) = apply_colormap(&catalog, &DynamicImage::ImageLuma8(gradient), "jet").unwrap();
    assert_eq!(from_upload.as_raw(), direct.as_raw());
}
