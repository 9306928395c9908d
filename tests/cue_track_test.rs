use capstan::domain::{format_timestamp, CueTrackDocument, SegmentRecord};

#[test]
fn given_fractional_seconds_when_formatting_then_millis_are_floored_remainder() {
    assert_eq!(format_timestamp(125.4), "00:02:05.400");
    assert_eq!(format_timestamp(3661.005), "01:01:01.005");
}

#[test]
fn given_zero_and_subsecond_values_when_formatting_then_fields_are_zero_padded() {
    assert_eq!(format_timestamp(0.0), "00:00:00.000");
    assert_eq!(format_timestamp(0.007), "00:00:00.007");
    assert_eq!(format_timestamp(59.999), "00:00:59.999");
}

#[test]
fn given_more_than_a_day_when_formatting_then_hours_widen_past_two_digits() {
    assert_eq!(format_timestamp(100.0 * 3600.0), "100:00:00.000");
}

#[test]
fn given_empty_segment_list_when_assembling_then_document_is_header_only() {
    let document = CueTrackDocument::assemble(&[]);

    assert!(document.is_empty());
    assert_eq!(document.render(), "WEBVTT\n\n");
}

#[test]
fn given_valid_segments_when_assembling_then_cues_render_in_input_order() {
    let segments = vec![
        SegmentRecord::new(0.0, 1.5, " hello "),
        SegmentRecord::new(2.0, 3.25, "world"),
    ];

    let document = CueTrackDocument::assemble(&segments);

    assert_eq!(
        document.render(),
        "WEBVTT\n\n\
         00:00:00.000 --> 00:00:01.500\nhello\n\n\
         00:00:02.000 --> 00:00:03.250\nworld\n\n"
    );
}

#[test]
fn given_inverted_timing_when_assembling_then_segment_is_dropped_and_neighbors_survive() {
    let segments = vec![
        SegmentRecord::new(0.0, 1.5, "hello"),
        SegmentRecord::new(1.5, 1.2, "bad"),
        SegmentRecord::new(2.0, 3.25, "world"),
    ];

    let document = CueTrackDocument::assemble(&segments);

    assert_eq!(document.cues().len(), 2);
    assert_eq!(document.cues()[0].text, "hello");
    assert_eq!(document.cues()[1].text, "world");
}

#[test]
fn given_whitespace_only_text_when_assembling_then_segment_is_dropped() {
    let segments = vec![
        SegmentRecord::new(0.0, 1.0, "   "),
        SegmentRecord::new(1.0, 2.0, "kept"),
        SegmentRecord::new(2.0, 3.0, ""),
    ];

    let document = CueTrackDocument::assemble(&segments);

    assert_eq!(document.cues().len(), 1);
    assert_eq!(document.cues()[0].text, "kept");
}

#[test]
fn given_out_of_order_segments_when_assembling_then_order_is_preserved_not_sorted() {
    let segments = vec![
        SegmentRecord::new(10.0, 11.0, "second"),
        SegmentRecord::new(0.0, 1.0, "first"),
    ];

    let document = CueTrackDocument::assemble(&segments);

    assert_eq!(document.cues()[0].text, "second");
    assert_eq!(document.cues()[1].text, "first");
}

#[test]
fn given_identical_input_when_assembling_twice_then_output_is_byte_identical() {
    let segments = vec![
        SegmentRecord::new(0.0, 1.5, "hello"),
        SegmentRecord::new(1.5, 1.2, "bad"),
        SegmentRecord::new(2.0, 3.25, "world"),
    ];

    let first = CueTrackDocument::assemble(&segments).render();
    let second = CueTrackDocument::assemble(&segments).render();

    assert_eq!(first, second);
}

#[test]
fn given_only_malformed_segments_when_assembling_then_document_is_valid_and_empty() {
    let segments = vec![
        SegmentRecord::new(5.0, 1.0, "inverted"),
        SegmentRecord::new(0.0, 1.0, "  "),
    ];

    let document = CueTrackDocument::assemble(&segments);

    assert!(document.is_empty());
    assert_eq!(document.render(), "WEBVTT\n\n");
}

#[test]
fn given_zero_length_cue_when_assembling_then_it_is_retained() {
    let segments = vec![SegmentRecord::new(1.0, 1.0, "instant")];

    let document = CueTrackDocument::assemble(&segments);

    assert_eq!(document.cues().len(), 1);
}
