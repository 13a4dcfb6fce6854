use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse_macro_input, Data, DeriveInput, Error, Field, Fields, Lit, Meta, NestedMeta,
};


/// Returns the label of a field, either the value of `#[parameter(name = "...")]`
/// or the field identifier itself
fn parameter_label(field: &Field) -> String {
    for attr in &field.attrs {
        if !attr.path.is_ident("parameter") {
            continue;
        }

        if let Ok(Meta::List(list)) = attr.parse_meta() {
            for nested in list.nested.iter() {
                if let NestedMeta::Meta(Meta::NameValue(name_value)) = nested {
                    if name_value.path.is_ident("name") {
                        if let Lit::Str(label) = &name_value.lit {
                            return label.value();
                        }
                    }
                }
            }
        }
    }

    field.ident.as_ref()
        .map(|ident| ident.to_string())
        .unwrap_or_default()
}

/// Derive macro to implement `NamedParameters` for a struct of `f64` fields,
/// each field is addressable by its identifier or by the label given with
/// `#[parameter(name = "...")]`
#[proc_macro_derive(NamedParameters, attributes(parameter))]
pub fn derive_named_parameters(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match input.data {
        Data::Struct(data) => match data.fields {
            Fields::Named(fields) => fields.named,
            _ => {
                return Error::new(Span::call_site(), "NamedParameters requires named fields")
                    .to_compile_error()
                    .into();
            }
        },
        _ => {
            return Error::new(Span::call_site(), "NamedParameters can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    let labels: Vec<String> = fields.iter()
        .map(parameter_label)
        .collect();
    let idents: Vec<_> = fields.iter()
        .filter_map(|field| field.ident.clone())
        .collect();

    let expanded = quote! {
        impl #impl_generics crate::neuron::ode_model::NamedParameters for #name #ty_generics #where_clause {
            fn parameter_names() -> &'static [&'static str] {
                &[#(#labels),*]
            }

            fn get_parameter(&self, name: &str) -> Option<f64> {
                match name {
                    #(#labels => Some(self.#idents),)*
                    _ => None,
                }
            }

            fn set_parameter(&mut self, name: &str, value: f64) -> bool {
                match name {
                    #(#labels => { self.#idents = value; true },)*
                    _ => false,
                }
            }
        }
    };

    TokenStream::from(expanded)
}
