use std::fs;

use tempfile::tempdir;

use spmat::{
    EntryOrder, Error, ErrorKind, Operation, SparseMatrix, Strategy, add, load, multiply_optimal,
    multiply_slow, render, save, save_with_order, subtract,
};

use crate::sample_inputs::get_test_file_path;

fn load_named(name: &str) -> SparseMatrix {
    load(get_test_file_path(name)).unwrap()
}

#[test]
fn square_times_identity() {
    let a = load_named("square");
    let identity = load_named("identity");

    assert_eq!(a.dimensions(), (2, 2));
    assert_eq!(a.nnz(), 4);
    assert_eq!(multiply_slow(&a, &identity).unwrap(), a);
    assert_eq!(multiply_optimal(&a, &identity).unwrap(), a);
}

#[test]
fn malformed_lines_are_skipped() {
    let m = load_named("with_noise");

    assert_eq!(m.dimensions(), (3, 3));
    assert_eq!(m.nnz(), 2);
    assert_eq!(m.get_element(0, 0), 5);
    assert_eq!(m.get_element(2, 2), -7);
    assert_eq!(m.get_element(1, 2), 0);
    assert_eq!(m.get_element(1, 1), 0);
}

#[test]
fn wide_times_tall() {
    let wide = load_named("wide");
    let tall = load_named("tall");

    let expected = SparseMatrix::from_entries(2, 2, [(0, 0, 6), (0, 1, 1), (1, 0, 12)]);
    assert_eq!(multiply_slow(&wide, &tall).unwrap(), expected);
    assert_eq!(multiply_optimal(&wide, &tall).unwrap(), expected);

    let other_way = multiply_optimal(&tall, &wide).unwrap();
    assert_eq!(other_way.dimensions(), (3, 3));
    assert_eq!(other_way, multiply_slow(&tall, &wide).unwrap());
}

#[test]
fn add_wide_and_tall_is_rejected() {
    let wide = load_named("wide");
    let tall = load_named("tall");

    for result in [add(&wide, &tall), subtract(&wide, &tall)] {
        let error = Error::from(result.unwrap_err());
        assert_eq!(error.kind(), ErrorKind::DimensionMismatch);
    }
}

#[test]
fn missing_file() {
    let error = Error::from(load::<i64>(get_test_file_path("does_not_exist")).unwrap_err());

    assert_eq!(error.kind(), ErrorKind::FileNotFound);
}

#[test]
fn unreadable_path_is_not_missing() {
    let directory = tempdir().unwrap();

    // Exists, but can't be read as a file
    let error = Error::from(load::<i64>(directory.path()).unwrap_err());
    assert_eq!(error.kind(), ErrorKind::Other);
}

#[test]
fn bad_header() {
    let error = Error::from(load::<i64>(get_test_file_path("bad_header")).unwrap_err());

    assert_eq!(error.kind(), ErrorKind::Format);
    assert!(error.to_string().contains("line 2"));
}

#[test]
fn save_is_byte_compatible() {
    let directory = tempdir().unwrap();
    let path = directory.path().join("copy.txt");

    // The file is already in the lexicographic order
    let original = fs::read_to_string(get_test_file_path("two_digit_indices")).unwrap();
    let m = load_named("two_digit_indices");
    save(&m, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
    assert_eq!(render(&m), original);
}

#[test]
fn row_major_output() {
    let directory = tempdir().unwrap();
    let path = directory.path().join("row_major.txt");

    let m = load_named("two_digit_indices");
    save_with_order(&m, &path, EntryOrder::RowMajor).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "rows=12\ncols=12\n(1, 2, 5)\n(1, 5, 3)\n(1, 10, 4)\n(2, 0, 1)\n(9, 11, 6)\n(10, 0, 2)\n",
    );
}

#[test]
fn save_then_load() {
    let directory = tempdir().unwrap();

    for name in ["square", "identity", "with_noise", "wide", "tall", "two_digit_indices"] {
        let m = load_named(name);
        let path = directory.path().join(name).with_extension("txt");

        save(&m, &path).unwrap();
        assert_eq!(load::<i64>(&path).unwrap(), m);
    }
}

#[test]
fn save_overwrites() {
    let directory = tempdir().unwrap();
    let path = directory.path().join("result.txt");
    fs::write(&path, "rows=100\ncols=100\n(99, 99, 1)\n(98, 98, 1)\n").unwrap();

    let identity = load_named("identity");
    save(&identity, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 1)\n");
}

#[test]
fn save_into_missing_directory() {
    let directory = tempdir().unwrap();
    let path = directory.path().join("outputs").join("result.txt");

    let error = Error::from(save(&load_named("square"), &path).unwrap_err());
    assert_eq!(error.kind(), ErrorKind::Other);
}

#[test]
fn operations_on_files() {
    let a = load_named("square");
    let identity = load_named("identity");

    let sum = Operation::Addition.apply(&a, &identity).unwrap();
    assert_eq!(render(&sum), "rows=2\ncols=2\n(0, 0, 2)\n(0, 1, 2)\n(1, 0, 3)\n(1, 1, 5)\n");

    let difference = Operation::Subtraction.apply(&identity, &a).unwrap();
    assert_eq!(render(&difference), "rows=2\ncols=2\n(0, 1, -2)\n(1, 0, -3)\n(1, 1, -3)\n");

    assert!(Operation::Subtraction.apply(&a, &a).unwrap().is_empty());

    let square = Operation::Multiplication(Strategy::Optimal).apply(&a, &a).unwrap();
    assert_eq!(render(&square), "rows=2\ncols=2\n(0, 0, 7)\n(0, 1, 10)\n(1, 0, 15)\n(1, 1, 22)\n");
}
