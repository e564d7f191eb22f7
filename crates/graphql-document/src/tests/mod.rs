mod directive_annotation_tests;
mod value_round_trip_tests;
