//! The `#[test]` attribute behind `resultshape_testhelpers::test`.

use unsynn::*;

keyword! {
    KFn = "fn";
}

unsynn! {
    // attributes, visibility and qualifiers in front of `fn`
    struct Preamble {
        items: Any<Cons<Except<KFn>, TokenTree>>,
    }

    // generics and parameters, up to the body
    struct Signature {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct TestFn {
        preamble: Preamble, _fn: KFn, name: Ident,
        signature: Signature, body: BraceGroup
    }
}

impl quote::ToTokens for Preamble {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for Signature {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

/// Turns `fn name() { ... }` into a test returning
/// `eyre::Result<()>`, so the body can use `?` on any error.
///
/// The logger and error hooks are installed before the body runs, and the
/// test name is logged at trace level.
#[proc_macro_attribute]
pub fn test(
    _attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = TokenStream::from(item);
    let mut tokens = item.to_token_iter();
    let Ok(TestFn {
        preamble,
        _fn,
        name,
        signature,
        body,
    }) = tokens.parse::<TestFn>()
    else {
        return quote::quote! {
            ::core::compile_error!("#[resultshape_testhelpers::test] expects a function with a body");
        }
        .into();
    };

    let body = body.0.stream();
    let test_name = name.to_string();

    quote::quote! {
        #[::core::prelude::rust_2024::test]
        #preamble fn #name #signature -> ::resultshape_testhelpers::eyre::Result<()> {
            ::resultshape_testhelpers::setup();
            ::resultshape_testhelpers::log::trace!("running {}", #test_name);

            {
                #body
            };

            Ok(())
        }
    }
    .into()
}
