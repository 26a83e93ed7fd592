use pretty_assertions::assert_eq;
use proc_macro2::TokenStream;
use quote::quote;

fn errors(input: TokenStream) -> Vec<String> {
    match sift_codegen::generate(input) {
        Ok(output) => panic!("expected errors, got `{output}`"),
        Err(err) => err.into_iter().map(|err| err.to_string()).collect(),
    }
}

// ---------------------------------------------------------------------------
// Accepted input
// ---------------------------------------------------------------------------

#[test]
fn expands_entity_impl() {
    let output = sift_codegen::generate(quote! {
        #[entity(name = "OrderLine")]
        struct Line {
            #[key]
            id: i64,
            #[field(format = "trim", not_query)]
            #[column("sku_code")]
            sku: String,
            #[field(skip)]
            scratch: Vec<u8>,
        }
    })
    .unwrap()
    .to_string();

    assert!(output.contains("\"OrderLine\""));
    assert!(output.contains("\"sku_code\""));
    assert!(output.contains("Format :: Trim"));
    assert!(output.contains("Behavior :: NOT_QUERY"));
    assert!(output.contains("Role :: PRIMARY_KEY"));
    assert!(!output.contains("scratch"));
    // no `#[state]` field, so the trait defaults stay
    assert!(!output.contains("fn state"));
}

#[test]
fn readonly_field_is_not_updatable() {
    let output = sift_codegen::generate(quote! {
        struct Audit {
            #[key]
            id: i64,
            #[field(readonly)]
            created: u32,
        }
    })
    .unwrap()
    .to_string();

    assert!(output.contains("field_readonly"));
    assert!(output.contains("Behavior :: NOT_UPDATE"));
}

// ---------------------------------------------------------------------------
// Struct shape
// ---------------------------------------------------------------------------

#[test]
fn tuple_struct() {
    assert_eq!(
        errors(quote! { struct Pair(i64, String); }),
        ["entity fields must be named"]
    );
}

#[test]
fn not_a_struct() {
    let errs = errors(quote! { enum Status { Open, Closed } });
    assert_eq!(errs.len(), 1);
}

#[test]
fn second_state_field() {
    assert_eq!(
        errors(quote! {
            struct Order {
                #[key]
                id: i64,
                #[state]
                a: EntityState,
                #[state]
                b: EntityState,
            }
        }),
        ["only one field can be marked #[state]"]
    );
}

#[test]
fn unknown_entity_option() {
    assert_eq!(
        errors(quote! {
            #[entity(table = "orders")]
            struct Order {
                #[key]
                id: i64,
            }
        }),
        ["expected `name = \"...\"`"]
    );
}

// ---------------------------------------------------------------------------
// Field attributes
// ---------------------------------------------------------------------------

#[test]
fn duplicate_key() {
    assert_eq!(
        errors(quote! {
            struct Order {
                #[key]
                #[key]
                id: i64,
            }
        }),
        ["duplicate #[key] attribute"]
    );
}

#[test]
fn key_takes_no_arguments() {
    let errs = errors(quote! {
        struct Order {
            #[key(auto)]
            id: i64,
        }
    });
    assert_eq!(errs.len(), 1);
}

#[test]
fn unknown_flags() {
    assert_eq!(
        errors(quote! {
            struct Order {
                #[role(primary)]
                id: i64,
                #[cache(prefix)]
                region: String,
                #[db(nullable)]
                notes: String,
            }
        }),
        [
            "unknown flag `primary`; expected one of: primary_key, increment, revision, \
             sequence, archived, isolation, created_date, created_user, updated_date, \
             updated_user, split_value",
            "unknown flag `prefix`; expected one of: key, key_prefix, ignore",
            "unknown flag `nullable`; expected one of: not_fixed_length, not_null, has_default",
        ]
    );
}

#[test]
fn duplicate_flag() {
    assert_eq!(
        errors(quote! {
            struct Order {
                #[key]
                #[role(primary_key)]
                id: i64,
            }
        }),
        ["duplicate flag `primary_key`"]
    );
}

#[test]
fn unknown_format() {
    assert_eq!(
        errors(quote! {
            struct Customer {
                #[key]
                id: i64,
                #[field(format = "title_case")]
                name: String,
            }
        }),
        ["unknown format `title_case`; expected one of: trim, trim_start, trim_end, \
          char_length, upper, lower"]
    );
}

#[test]
fn unknown_field_option() {
    assert_eq!(
        errors(quote! {
            struct Customer {
                #[key]
                id: i64,
                #[field(hidden)]
                name: String,
            }
        }),
        ["unknown flag `hidden`; expected one of: not_query, not_insert, not_update"]
    );
}

#[test]
fn duplicate_column_and_relation() {
    assert_eq!(
        errors(quote! {
            struct Order {
                #[key]
                id: i64,
                #[column("a")]
                #[column("b")]
                status: String,
                #[relation(target = Customer, references = id)]
                #[relation(target = Customer, references = id)]
                customer_id: i64,
            }
        }),
        ["duplicate #[column] attribute", "duplicate #[relation] attribute"]
    );
}

#[test]
fn incomplete_relation() {
    assert_eq!(
        errors(quote! {
            struct Order {
                #[key]
                id: i64,
                #[relation(target = Customer)]
                customer_id: i64,
                #[relation(references = id)]
                owner_id: i64,
            }
        }),
        [
            "missing `references = <field>`",
            "missing `target = <Model>`"
        ]
    );
}

#[test]
fn errors_of_a_skipped_field_are_reported() {
    assert_eq!(
        errors(quote! {
            struct Order {
                #[key]
                id: i64,
                #[field(skip)]
                #[db(fixed)]
                scratch: Vec<u8>,
            }
        }),
        ["unknown flag `fixed`; expected one of: not_fixed_length, not_null, has_default"]
    );
}
