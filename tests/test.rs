use std::fmt;

use omega::{
    array_to_tuple, drop, head, init, invoke, last, positions, project, render, reverse, show,
    tail, take, Ascending, Descending, Element, Head, Idx, Init, Last, PositionList, Project,
    Reverse, Show, Skip, Tail, Take, Tuple,
};
use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

use crate::compile::select::{split_first, swap_pair, twice, window};
use crate::compile::spread::{call_with, labelled};

mod compile;

#[test]
fn test_expand() {
    macrotest::expand("tests/expand/*.rs");
}

#[test]
fn test_position_lists() {
    assert_eq!(<Ascending<1, 3>>::positions(), [1, 2, 3]);
    assert_eq!(<Descending<5, 1>>::positions(), [5, 4, 3, 2, 1]);
    assert_eq!(<Ascending<2, 2>>::positions(), [2]);
    assert_eq!(<Descending<0, 0>>::positions(), [0]);
    assert!(<Ascending<3, 1>>::positions().is_empty());
    assert!(<Descending<1, 3>>::positions().is_empty());
    assert_eq!(<(Idx<3>, Idx<3>, Idx<0>)>::positions(), [3, 3, 0]);
    assert_eq!(<(Idx<3>, Idx<3>, Idx<0>)>::LEN, 3);
    assert_eq!(<(Idx<7>,)>::position(0), Some(7));
    assert_eq!(<(Idx<7>,)>::position(1), None);
    assert_eq!(<Descending<4, 2>>::position(2), Some(2));
    assert_eq!(<Descending<4, 2>>::position(3), None);
    assert_eq!(Idx::<9>::POSITION, 9);
}

#[test]
fn test_positions_macro() {
    assert_eq!(positions![], ());
    assert_eq!(positions![4], (Idx::<4>,));
    assert_eq!(
        positions![2..=0, 1..3],
        (Idx::<2>, Idx::<1>, Idx::<0>, Idx::<1>, Idx::<2>)
    );
    assert_eq!(positions![1 + 1, (3)], (Idx::<2>, Idx::<3>));
    // an empty half-open range contributes nothing
    assert_eq!(positions![0, 3..3], (Idx::<0>,));
}

#[test]
fn test_project_ranges() {
    let t = (5, 6, 7, "yuppi!", 8, 9, 10.5);
    assert_eq!(project(t, Ascending::<1, 3>), (6, 7, "yuppi!"));
    assert_eq!(project(t, Descending::<5, 1>), (9, 8, "yuppi!", 7, 6));
    assert_eq!(project(t, Ascending::<0, 6>), t);
    assert_eq!(
        project(t, Descending::<6, 0>),
        (10.5, 9, 8, "yuppi!", 7, 6, 5)
    );
    assert_eq!(project(t, Ascending::<6, 6>), (10.5,));
    assert_eq!(project(t, Ascending::<3, 1>), ());
    assert_eq!(project(t, Descending::<1, 3>), ());
    assert_eq!(project(t, ()), ());
    assert_eq!(project((), ()), ());
}

#[test]
fn test_selection_properties() {
    let t = (5, 6, 7, "yuppi!", 8, 9, 10.5);
    assert_eq!(project(t, positions![1, 2, 3]), project(t, Ascending::<1, 3>));

    let print = |a: i32, b: i32, n: &str| format!("a={}, b={}, n={}", a, b, n);
    assert_eq!(invoke(print, project(t, Ascending::<1, 3>)), "a=6, b=7, n=yuppi!");

    // the same bounds walked both ways are mirror images
    assert_eq!(
        reverse(project(t, Ascending::<2, 5>)),
        project(t, Descending::<5, 2>)
    );

    let picked = project(t, positions![3, 2, 1, 6]);
    assert_eq!(*Element::<3>::element(&picked), t.6);
    assert_eq!(*Element::<1>::element(&picked), t.2);

    // an identity list leaves the tuple alone, however often it is applied
    let same = project(t, Ascending::<0, 6>);
    assert_eq!(project(same, positions![0..7]), t);
}

#[test]
fn test_ranges_move_elements() {
    let t = (String::from("a"), vec![1, 2], String::from("c"));
    let (v, c) = project(t, Ascending::<1, 2>);
    assert_eq!(v, [1, 2]);
    assert_eq!(c, "c");

    // no `Clone` needed to move out through a range
    let t = (NoClone(1), NoClone(2));
    let (NoClone(second), NoClone(first)) = project(t, Descending::<1, 0>);
    assert_eq!((first, second), (1, 2));
}

#[test]
fn test_explicit_lists_clone_elements() {
    let t = (String::from("a"), vec![1, 2], String::from("c"));
    let (c, a) = project(&t, positions![2, 0]);
    assert_eq!((c.as_str(), a.as_str()), ("c", "a"));

    let (c, a) = project(t.clone(), positions![2, 0]);
    assert_eq!((c, a), (String::from("c"), String::from("a")));
    // the source is untouched by a cloning projection
    assert_eq!(t.0, "a");
}

#[test]
fn test_project_explicit_lists() {
    let t = (5, 6, 7, "yuppi!", 8, 9, 10.5);
    assert_eq!(project(t, positions![3, 2, 1, 6]), ("yuppi!", 7, 6, 10.5));
    assert_eq!(project(t, positions![0, 0, 0]), (5, 5, 5));
    assert_eq!(
        project(t, positions![6, 5, 4, 3, 2, 1, 0]),
        project(t, Descending::<6, 0>)
    );

    let words = (String::from("wood"), String::from("world!"));
    let (a, b, c) = project(words, positions![1, 0, 1]);
    assert_eq!((a.as_str(), b.as_str(), c.as_str()), ("world!", "wood", "world!"));
}

#[test]
fn test_project_references() {
    let mut t = (1, String::from("a"), 3.5);
    {
        let (first, third) = project(&t, positions![0, 2]);
        assert_eq!((*first, *third), (1, 3.5));
        let (middle,) = project(&t, Ascending::<1, 1>);
        assert_eq!(middle, "a");
    }
    {
        let (f, s) = project(&mut t, Descending::<2, 1>);
        *f *= 2.0;
        s.push('b');
    }
    assert_eq!(t, (1, String::from("ab"), 7.0));
    assert_eq!(project(&mut t, ()), ());
}

#[test]
fn test_elements() {
    let mut t = (5, "yuppi!", 10.5);
    assert_eq!(<(i32, &str, f64)>::ARITY, 3);
    assert_eq!(<()>::ARITY, 0);
    assert_eq!(*Element::<2>::element(&t), 10.5);
    *Element::<0>::element_mut(&mut t) = 50;
    assert_eq!(Element::<0>::into_element(t), 50);
}

#[test]
fn test_head_last_tail() {
    let t = (5, 6, 7, "yuppi!", 8, 9, 10.5);
    assert_eq!(head(t), (5,));
    assert_eq!(last(t), (10.5,));
    assert_eq!(tail(t), (6, 7, "yuppi!", 8, 9, 10.5));
    assert_eq!(init(t), (5, 6, 7, "yuppi!", 8, 9));

    assert_eq!(head((1,)), (1,));
    assert_eq!(last((1,)), (1,));
    assert_eq!(tail((1,)), ());
    assert_eq!(init((1,)), ());
}

#[test]
fn test_reverse() {
    let t = (5, 6, 7, "yuppi!", 8, 9, 10.5);
    let r = reverse(t);
    assert_eq!(r, (10.5, 9, 8, "yuppi!", 7, 6, 5));
    assert_eq!(reverse(r), t);
    assert_eq!(*Element::<0>::element(&r), t.6);
    assert_eq!(*Element::<3>::element(&r), t.3);
    assert_eq!(reverse(()), ());
    assert_eq!(reverse((1,)), (1,));
}

#[test]
fn test_take_and_drop() {
    let t = (5, 6, 7, "yuppi!", 8, 9, 10.5);
    assert_eq!(take::<0, _>(t), ());
    assert_eq!(take::<3, _>(t), (5, 6, 7));
    assert_eq!(take::<7, _>(t), t);
    assert_eq!(drop::<0, _>(t), t);
    assert_eq!(drop::<3, _>(t), ("yuppi!", 8, 9, 10.5));
    assert_eq!(drop::<7, _>(t), ());

    // `take` and `drop` partition the tuple
    let (a, b, c) = take::<3, _>(t);
    let (d, e, f, g) = drop::<3, _>(t);
    assert_eq!((a, b, c, d, e, f, g), t);
}

#[test]
fn test_accessors_through_references() {
    let mut t = (1, 2, 3);
    assert_eq!(head(&t), (&1,));
    assert_eq!(init(&t), (&1, &2));
    assert_eq!(reverse(&t), (&3, &2, &1));

    let (second, third) = tail(&mut t);
    *second += 10;
    *third += 20;
    let (end,) = last(&mut t);
    *end += 1;
    assert_eq!(t, (1, 12, 24));

    let (a, b) = Take::<2>::take(&mut t);
    std::mem::swap(a, b);
    assert_eq!(t, (12, 1, 24));
}

#[test]
fn test_invoke() {
    let print = |a: i32, b: i32, n: &str| format!("a={}, b={}, n={}", a, b, n);
    assert_eq!(invoke(print, (6, 7, "yuppi!")), "a=6, b=7, n=yuppi!");
    assert_eq!(invoke(|| 42, ()), 42);
    assert_eq!(invoke(|s: &String| s.len(), &(String::from("four"),)), 4);

    let mut t = (1, 2);
    invoke(
        |a: &mut i32, b: &mut i32| std::mem::swap(a, b),
        &mut t,
    );
    assert_eq!(t, (2, 1));

    // projections compose with invoke
    let t = (5, 6, 7, "yuppi!", 8, 9, 10.5);
    assert_eq!(invoke(print, project(t, positions![0, 1, 3])), "a=5, b=6, n=yuppi!");
    assert_eq!(call_with((2, 3), |a: i32, b: i32| a * b), 6);
}

#[test]
fn test_show() {
    let t = (5, 6, 7, "yuppi!", 8, 9, 10.5);
    assert_eq!(Show(&t).to_string(), "<5, 6, 7, yuppi!, 8, 9, 10.5>");
    assert_eq!(render(&()).as_deref(), Ok("<>"));
    assert_eq!(render(&("x",)).as_deref(), Ok("<x>"));
    assert_eq!(
        render(&project(t, Ascending::<1, 3>)).as_deref(),
        Ok("<6, 7, yuppi!>")
    );
    assert_eq!(labelled("t", &(1, 'c')), "t = <1, c>");

    let mut out = String::from("tuple: ");
    show(&mut out, &(true, 0.5)).unwrap();
    assert_eq!(out, "tuple: <true, 0.5>");
}

#[test]
fn test_render_reports_element_errors() {
    let mut out = String::new();
    assert_eq!(show(&mut out, &(1, Failing, 3)), Err(fmt::Error));
    assert_eq!(render(&(1, Failing, 3)), Err(fmt::Error));
    assert_eq!(render(&(Failing,)), Err(fmt::Error));
}

#[test]
fn test_array_to_tuple() {
    assert_eq!(
        array_to_tuple(["hello", "wood", "world!"]),
        ("hello", "wood", "world!")
    );
    assert_eq!(array_to_tuple([0u8; 0]), ());
    let names = [String::from("a"), String::from("b")];
    let (a, b) = array_to_tuple(&names);
    assert_eq!((a.as_str(), b.as_str()), ("a", "b"));
    assert_eq!(render(&array_to_tuple([1, 2, 3])).as_deref(), Ok("<1, 2, 3>"));
}

#[test]
fn test_generic_callers() {
    assert_eq!(swap_pair((1, "two", 3.0)), ("two", 1));
    assert_eq!(split_first((1, 2, 3)), ((1,), (2, 3)));
    assert_eq!(window::<1, 2, _>((1, 2, 3, 4)), (2, 3));
    assert_eq!(window::<2, 1, _>((1, 2, 3, 4)), ());
    assert_eq!(twice::<1, _>((1, String::from("x"))), (String::from("x"), String::from("x")));
}

#[test]
fn test_twelve_elements() {
    let t = (0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);
    assert_eq!(reverse(t), (11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0));
    assert_eq!(drop::<11, _>(t), (11,));
    assert_eq!(
        project(t, positions![11, 0, 11, 0, 11, 0, 11, 0, 11, 0, 11, 0]),
        (11, 0, 11, 0, 11, 0, 11, 0, 11, 0, 11, 0)
    );
    assert_eq!(omega::MAX_ARITY, <(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8)>::ARITY);
}

struct Opaque;

struct NoClone(u8);

struct Failing;

impl fmt::Display for Failing {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        Err(fmt::Error)
    }
}

// the empty tuple has nothing to take apart
assert_not_impl_any!((): Head, Last, Tail, Init, Take<0>, Skip<0>);
assert_impl_all!((): Reverse, Project<()>);

// positions past the arity are rejected
assert_not_impl_any!((u8, u8): Take<3>, Skip<3>, Project<Ascending<0, 2>>, Project<Descending<2, 0>>);
assert_impl_all!((u8, u8): Take<0>, Take<2>, Skip<2>, Project<Ascending<2, 1>>, Project<Descending<1, 2>>);
assert_not_impl_any!((u8, u8): Project<Ascending<3, 1>>, Element<2>);

// explicit lists clone by value and cannot alias through `&mut`
assert_not_impl_any!((Opaque,): Project<(Idx<0>,)>);
assert_impl_all!((Opaque,): Project<Ascending<0, 0>>, Head, Init);
assert_impl_all!(&'static (Opaque,): Project<(Idx<0>, Idx<0>)>);
assert_not_impl_any!(&'static mut (u8, u8): Project<(Idx<0>,)>);

assert_type_eq_all!(<(u8, u16, u32) as Reverse>::Output, (u32, u16, u8));
assert_type_eq_all!(<(u8, u16, u32) as Init>::Output, (u8, u16));
assert_type_eq_all!(<&'static (u8, u16) as Tail>::Output, (&'static u16,));
assert_type_eq_all!(<&'static mut (u8, u16) as Last>::Output, (&'static mut u16,));
assert_type_eq_all!(<(u8, u16) as Take<0>>::Output, ());
assert_type_eq_all!(<(u8, u16) as Project<(Idx<1>, Idx<1>)>>::Output, (u16, u16));
