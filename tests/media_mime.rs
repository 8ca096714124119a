use std::path::Path;
use vidserve::media::mime::{classify, content_type_for, is_video, FALLBACK_MIME};

#[test]
fn test_mp4_is_video_mp4() {
    assert_eq!(classify(Path::new("movie.mp4")), Some("video/mp4"));
}

#[test]
fn test_mkv_mime_is_matroska() {
    assert_eq!(classify(Path::new("video.mkv")), Some("video/x-matroska"));
}

#[test]
fn test_avi_mime_is_msvideo() {
    assert_eq!(classify(Path::new("old.avi")), Some("video/x-msvideo"));
}

#[test]
fn test_txt_returns_none() {
    assert!(classify(Path::new("readme.txt")).is_none());
}

#[test]
fn test_no_extension_returns_none() {
    assert!(classify(Path::new("Makefile")).is_none());
}

#[test]
fn test_suffix_must_be_the_extension() {
    assert!(!is_video(Path::new("movie.mp4.part")));
    assert!(!is_video(Path::new("mp4")));
}

#[test]
fn test_case_insensitive() {
    assert_eq!(classify(Path::new("MOVIE.MP4")), Some("video/mp4"));
    assert!(is_video(Path::new("Clip.MkV")));
}

#[test]
fn test_unknown_extension_falls_back_to_octet_stream() {
    assert_eq!(content_type_for(Path::new("notes.bin")), FALLBACK_MIME);
}
