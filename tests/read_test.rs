mod common;

use std::convert::TryFrom;

use risp::prelude::*;


#[test]
fn plain_symbol() {
    common::setup();
    let mut state = State::new();
    let mut reader = Reader::from_str(&mut state, "hoge");

    let result = reader.read().unwrap().unwrap();
    let symbol = Symbol::try_from(result).unwrap();
    assert_eq!(symbol.name(), "hoge");
    assert_eq!(symbol.package(), state.current_package());
}

#[test]
fn symbol_names_normalize_to_lowercase() {
    common::setup();
    let mut state = State::new();
    let mut reader = Reader::from_str(&mut state, "HoGe");

    let result = reader.read().unwrap().unwrap();
    assert_eq!(result, Symbol::new("hoge", state.current_package()).into());
}

#[test]
fn leading_colon_is_a_keyword() {
    common::setup();
    let mut state = State::new();
    let mut reader = Reader::from_str(&mut state, ":hoge");

    let result = reader.read().unwrap().unwrap();
    let keyword = state.keyword_package();
    assert_eq!(result, Symbol::new("hoge", keyword).into());
    // Same name, different package, different symbol.
    assert_ne!(
        result,
        Symbol::new("hoge", state.current_package()).into()
    );
}

#[test]
fn external_symbol_access() {
    common::setup();
    let mut state = State::new();
    let mut reader = Reader::from_str(&mut state, "hoge:piyo");

    let result = reader.read().unwrap().unwrap();
    let package = state.define_package("hoge");
    assert_eq!(result, Symbol::new("piyo", package).into());
}

#[test]
fn internal_symbol_access() {
    common::setup();
    let mut state = State::new();
    let mut reader = Reader::from_str(&mut state, "hoge::piyo");

    let result = reader.read().unwrap().unwrap();
    let package = state.define_package("hoge");
    assert_eq!(result, Symbol::new("piyo", package).into());
}

#[test]
fn external_and_internal_access_agree() {
    common::setup();
    let mut state = State::new();

    let external = Reader::from_str(&mut state, "hoge:piyo")
        .read()
        .unwrap()
        .unwrap();
    let internal = Reader::from_str(&mut state, "hoge::piyo")
        .read()
        .unwrap()
        .unwrap();
    assert_eq!(external, internal);
}

#[test]
fn packages_are_created_on_demand() {
    common::setup();
    let mut state = State::new();
    assert_eq!(state.find_package("hoge"), None);

    Reader::from_str(&mut state, "hoge:piyo")
        .read()
        .unwrap()
        .unwrap();

    let package = state.find_package("hoge").unwrap();
    assert_eq!(state.package(package).name(), "hoge");
    // Idempotent.
    assert_eq!(state.define_package("hoge"), package);
}

#[test]
fn t() {
    common::setup();
    let mut state = State::new();
    let mut reader = Reader::from_str(&mut state, "t");
    assert_eq!(reader.read().unwrap().unwrap(), Primitive::T.into());
}

#[test]
fn nil() {
    common::setup();
    let mut state = State::new();
    let mut reader = Reader::from_str(&mut state, "nil");
    assert_eq!(reader.read().unwrap().unwrap(), Sexp::default());
}

#[test]
fn integer_literal() {
    common::setup();
    let mut state = State::new();
    let mut reader = Reader::from_str(&mut state, "123");
    assert_eq!(
        reader.read().unwrap().unwrap(),
        Number::Integer(123).into()
    );

    let mut reader = Reader::from_str(&mut state, "-42");
    assert_eq!(reader.read().unwrap().unwrap(), Number::Integer(-42).into());
}

#[test]
fn float_literal() {
    common::setup();
    let mut state = State::new();
    let mut reader = Reader::from_str(&mut state, "12.3");
    assert_eq!(reader.read().unwrap().unwrap(), Number::Float(12.3).into());
}

#[test]
fn empty_list_is_nil() {
    common::setup();
    let mut state = State::new();
    let mut reader = Reader::from_str(&mut state, "()");
    assert_eq!(reader.read().unwrap().unwrap(), Sexp::default());
}

#[test]
fn heterogeneous_list() {
    common::setup();
    let mut state = State::new();
    let mut reader = Reader::from_str(&mut state, "(1 2.5 hoge :kw)");
    let result = reader.read().unwrap().unwrap();

    let current = state.current_package();
    let keyword = state.keyword_package();
    assert_eq!(
        result,
        list!(
            Number::Integer(1),
            Number::Float(2.5),
            Symbol::new("hoge", current),
            Symbol::new("kw", keyword),
        )
    );
}

#[test]
fn list_element_access() {
    common::setup();
    let mut state = State::new();
    let mut reader = Reader::from_str(&mut state, "(hoge 123)");
    let result = reader.read().unwrap().unwrap();

    let cons = <&Cons>::try_from(&result).unwrap();
    let head = <&Symbol>::try_from(cons.car().unwrap()).unwrap();
    assert_eq!(head.name(), "hoge");
}

#[test]
fn string_decoding() {
    common::setup();
    let mut state = State::new();
    let mut reader = Reader::from_str(&mut state, r#""a\nb""#);

    let result = reader.read().unwrap().unwrap();
    let string = LangString::try_from(result).unwrap();
    assert_eq!(string.as_str(), "a\nb");
}

#[test]
fn reading_past_the_end_keeps_returning_none() {
    common::setup();
    let mut state = State::new();
    let mut reader = Reader::from_str(&mut state, "hoge");

    assert!(reader.read().unwrap().is_some());
    for _ in 0..3 {
        assert_eq!(reader.read().unwrap(), None);
    }
}

#[test]
fn registry_survives_failed_reads() {
    common::setup();
    let mut state = State::new();

    let err = Reader::from_str(&mut state, "(hoge:piyo").read().unwrap_err();
    assert_eq!(err.reason(), ReadErrorReason::UnterminatedList);

    // Packages defined before the failure remain usable.
    assert!(state.find_package("hoge").is_some());
    let result = Reader::from_str(&mut state, "hoge:piyo")
        .read()
        .unwrap()
        .unwrap();
    let package = state.find_package("hoge").unwrap();
    assert_eq!(result, Symbol::new("piyo", package).into());
}
