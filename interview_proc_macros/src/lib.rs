//! Attribute macros used by the `interview` crate.
//!
//! * `#[trace_fn]` wraps a function so that, when the calling crate is built
//!   with its `trace` feature, every call prints its arguments and return
//!   value to standard error.
//! * `#[self_test("name")]` keeps a test function as written and emits a
//!   `crate::selftest::SelfTest` constant describing it.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{parse_macro_input, FnArg, ItemFn, LitStr, PatIdent, PatType, ReturnType};

#[proc_macro_attribute]
pub fn trace_fn(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let fn_attrs = &input.attrs;
    let fn_vis = &input.vis;
    let fn_signature = &input.sig;
    let fn_name = &input.sig.ident;
    let fn_inputs = &input.sig.inputs;
    let fn_output = &input.sig.output;
    let fn_block = &input.block;

    // Input arguments for the function
    let inputs_print = fn_inputs.iter().map(|arg| match arg {
        FnArg::Typed(PatType { pat, .. }) => {
            if let syn::Pat::Ident(PatIdent { ident, .. }) = &**pat {
                quote! {
                    #[cfg(feature = "trace")]
                    eprintln!("Argument {} = {:?}", stringify!(#ident), #ident);
                }
            } else {
                quote! {}
            }
        }
        _ => quote! {},
    });

    // return value
    let return_print = if matches!(fn_output, ReturnType::Default) {
        quote! {}
    } else {
        quote! {
            #[cfg(feature = "trace")]
            eprintln!("Return value = {:?}", result);
        }
    };

    let fn_name_len = fn_name.to_string().len();
    let expanded = quote! {
        #(#fn_attrs)*
        #fn_vis #fn_signature {
            #[cfg(feature = "trace")]
            eprintln!("--------Entering function: {}-------", stringify!(#fn_name));
            #(#inputs_print)*
            #[allow(clippy::redundant_closure_call)]
            let result = (move || {
                #fn_block
            })();
            #[cfg(feature = "trace")]
            eprintln!("--------Exiting function: {}--------", stringify!(#fn_name));
            #return_print
            #[cfg(feature = "trace")]
            eprintln!("{}", "-".repeat(#fn_name_len + 34));
            result
        }
    };

    TokenStream::from(expanded)
}

/// Registers a zero-argument test function as a self-test.
///
/// The function must return a type convertible into
/// `crate::selftest::Outcome` (`bool` does). Next to the function a
/// constant named after it in upper case is emitted, e.g. `test_atoi`
/// gains `TEST_ATOI: crate::selftest::SelfTest`.
#[proc_macro_attribute]
pub fn self_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let name = parse_macro_input!(attr as LitStr);
    let input = parse_macro_input!(item as ItemFn);

    if !input.sig.inputs.is_empty() {
        return syn::Error::new_spanned(&input.sig.inputs, "self-tests take no arguments")
            .to_compile_error()
            .into();
    }
    if matches!(input.sig.output, ReturnType::Default) {
        return syn::Error::new_spanned(&input.sig, "self-tests must return an outcome")
            .to_compile_error()
            .into();
    }
    if name.value().is_empty() {
        return syn::Error::new(Span::call_site(), "self-test name must not be empty")
            .to_compile_error()
            .into();
    }

    let fn_vis = &input.vis;
    let fn_name = &input.sig.ident;
    let const_name = format_ident!("{}", fn_name.to_string().to_uppercase(), span = fn_name.span());

    let expanded = quote! {
        #input

        #fn_vis const #const_name: crate::selftest::SelfTest = crate::selftest::SelfTest::new(
            #name,
            || ::core::convert::Into::<crate::selftest::Outcome>::into(#fn_name()),
        );
    };

    TokenStream::from(expanded)
}
