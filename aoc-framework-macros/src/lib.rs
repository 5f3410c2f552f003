//! Procedural macros for the `aoc-framework` crate.

use proc_macro::TokenStream;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, Type, parse_macro_input};

/// Procedural macro attribute that implements `SolutionRunner` for a day.
///
/// The generated `run` parses the input with the `parsed` type, then solves part one and part two
/// against it through `aoc_framework::runner::solve_parsed_solution`.
///
/// # Properties
///
/// All properties are required.
///
/// - `name`: An expression that evaluates to `&str`, the solution's display name.
/// - `parsed`: A type implementing `ParseData`, parsed once from the raw input.
/// - `part_one`: A type implementing `Solution<PartOne>` with `Input` set to `parsed`.
/// - `part_two`: A type implementing `Solution<PartTwo>` with `Input` set to `parsed`.
///
/// # Errors
///
/// Returns a compile error if:
/// - Applied to anything other than a struct or impl block
/// - A property is missing, repeated, or unsupported
///
/// # Examples
///
/// With a struct `Warehouse` implementing `ParseData`, a struct `Day15` implementing both
/// `Solution<PartOne>` & `Solution<PartTwo>`, and a struct `AdventOfCodeSolutions<const DAY: u8>`
/// collecting runnable days:
///
/// ```ignore
/// #[solution_runner(
///     name = "Day 15: Warehouse Woes",
///     parsed = Warehouse,
///     part_one = Day15,
///     part_two = Day15
/// )]
/// impl AdventOfCodeSolutions<15> {}
/// ```
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    // The expression to use as a solution name; should resolve to string slice
    let mut name_expr_opt: Option<Expr> = None;
    // The type to use for a `ParseData` generic parameter
    let mut parsed_ty_opt: Option<Type> = None;
    // The type to use for a `Solution<PartOne>` generic parameter
    let mut part_one_ty_opt: Option<Type> = None;
    // The type to use for a `Solution<PartTwo>` generic parameter
    let mut part_two_ty_opt: Option<Type> = None;

    /// Parse a property's value into its slot, rejecting a second occurrence.
    fn parse_once<T: syn::parse::Parse>(
        meta: &ParseNestedMeta,
        slot: &mut Option<T>,
        key: &str,
    ) -> syn::Result<()> {
        if slot.is_some() {
            return Err(meta.error(format!("duplicate '{key}' property")));
        }
        *slot = Some(meta.value()?.parse()?);
        Ok(())
    }

    let solution_runner_parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("name") {
            parse_once(&meta, &mut name_expr_opt, "name")
        } else if meta.path.is_ident("parsed") {
            parse_once(&meta, &mut parsed_ty_opt, "parsed")
        } else if meta.path.is_ident("part_one") {
            parse_once(&meta, &mut part_one_ty_opt, "part_one")
        } else if meta.path.is_ident("part_two") {
            parse_once(&meta, &mut part_two_ty_opt, "part_two")
        } else {
            Err(meta.error("unsupported solution runner property"))
        }
    });
    parse_macro_input!(args with solution_runner_parser);

    let (Some(name_expr), Some(parsed_ty), Some(part_one_ty), Some(part_two_ty)) =
        (name_expr_opt, parsed_ty_opt, part_one_ty_opt, part_two_ty_opt)
    else {
        return Error::new(
            proc_macro2::Span::call_site(),
            "solution runner requires 'name', 'parsed', 'part_one', and 'part_two' properties",
        )
        .to_compile_error()
        .into();
    };

    let original_input = input.clone(); // clone before macro consumes input
    let item = parse_macro_input!(input as Item);

    let runner_ty = match item {
        Item::Struct(ItemStruct { ident, .. }) => quote! { #ident },
        Item::Impl(ItemImpl { self_ty, .. }) => quote! { #self_ty },
        _ => {
            return Error::new(
                proc_macro2::Span::call_site(),
                "the #[solution_runner] macro can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    let input_ts = proc_macro2::TokenStream::from(original_input);
    TokenStream::from(quote! {
        #input_ts

        impl aoc_framework::runner::SolutionRunner for #runner_ty {
            fn run(
                input: &str,
                handler: &mut dyn aoc_framework::runner::OutputHandler,
                timed: bool
            ) -> aoc_framework::DynamicResult<()> {
                aoc_framework::runner::solve_parsed_solution::<
                    #parsed_ty,
                    #part_one_ty,
                    #part_two_ty
                >(#name_expr, input, handler, timed)
            }
        }
    })
}
