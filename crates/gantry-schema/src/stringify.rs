//! SDL rendering of an augmented schema.
//!
//! Output is grouped into sections in a fixed order: objects, scalars, inputs
//! and enums, `Ref` inputs, `Filter` inputs, payloads, then the Query and
//! Mutation roots. Section membership comes from each type's kind and
//! [`TypeOrigin`] tag. Within a section types appear in name order.

use gantry_config::OutputConfig;
use gantry_core::{FieldDefinition, Schema, TypeDefinition, TypeKind, TypeOrigin};

#[derive(Default)]
struct Sections {
    objects: String,
    scalars: String,
    inputs: String,
    refs: String,
    filters: String,
    payloads: String,
}

struct Printer<'a> {
    config: &'a OutputConfig,
}

impl Printer<'_> {
    fn visible_fields<'d>(
        &self,
        def: &'d TypeDefinition,
    ) -> impl Iterator<Item = &'d FieldDefinition> {
        let config = self.config;
        def.fields
            .iter()
            .filter(move |field| !config.is_hidden(&field.name))
    }

    /// `keyword Name {` block of `name: Type` lines, followed by a blank line.
    fn fields_block(&self, keyword: &str, def: &TypeDefinition) -> String {
        let mut out = format!("{keyword} {} {{\n", def.name);
        for field in self.visible_fields(def) {
            out.push_str(&format!("{}{}: {}\n", self.config.indent, field.name, field.ty));
        }
        out.push_str("}\n\n");
        out
    }

    fn enum_block(&self, def: &TypeDefinition) -> String {
        let mut out = format!("enum {} {{\n", def.name);
        for value in def
            .enum_values
            .iter()
            .filter(|value| !self.config.is_hidden(value))
        {
            out.push_str(&format!("{}{value}\n", self.config.indent));
        }
        out.push_str("}\n\n");
        out
    }

    fn union_line(&self, def: &TypeDefinition) -> String {
        let members: Vec<&str> = def
            .members
            .iter()
            .filter(|member| !self.config.is_hidden(member))
            .map(String::as_str)
            .collect();
        format!("union {} = {}\n\n", def.name, members.join(" | "))
    }

    /// `type Query {` block of `name(arg: Type,...): Ret` lines.
    fn root_block(&self, root: &TypeDefinition) -> String {
        let mut out = format!("type {} {{\n", root.name);
        for field in self.visible_fields(root) {
            let args: Vec<String> = field
                .arguments
                .iter()
                .filter(|arg| !self.config.is_hidden(&arg.name))
                .map(|arg| format!("{}: {}", arg.name, arg.ty))
                .collect();
            out.push_str(&format!(
                "{}{}({}): {}\n",
                self.config.indent,
                field.name,
                args.join(&self.config.argument_separator),
                field.ty
            ));
        }
        out.push_str("}\n");
        out
    }

    fn place(&self, def: &TypeDefinition, sections: &mut Sections) {
        match (def.origin, def.kind) {
            (TypeOrigin::Ref, _) => sections.refs.push_str(&self.fields_block("input", def)),
            (TypeOrigin::Filter, _) => sections
                .filters
                .push_str(&self.fields_block("input", def)),
            (TypeOrigin::Payload, _) => sections
                .payloads
                .push_str(&self.fields_block("type", def)),
            (_, TypeKind::Object | TypeKind::Interface) => sections
                .objects
                .push_str(&self.fields_block(def.kind.keyword(), def)),
            (_, TypeKind::Union) => sections.objects.push_str(&self.union_line(def)),
            (_, TypeKind::Scalar) => sections
                .scalars
                .push_str(&format!("scalar {}\n", def.name)),
            (_, TypeKind::InputObject) => sections
                .inputs
                .push_str(&self.fields_block("input", def)),
            (_, TypeKind::Enum) => sections.inputs.push_str(&self.enum_block(def)),
        }
    }
}

/// Render `schema` with the default output settings.
#[must_use]
pub fn stringify(schema: &Schema) -> String {
    stringify_with(schema, &OutputConfig::default())
}

/// Render `schema` as SDL text.
///
/// Returns an empty string when the schema has no types. Types, fields,
/// arguments, and enum values whose name starts with the configured
/// introspection prefix are left out.
#[must_use]
pub fn stringify_with(schema: &Schema, config: &OutputConfig) -> String {
    if schema.is_empty() {
        return String::new();
    }

    let printer = Printer { config };
    let mut sections = Sections::default();
    for def in schema
        .types
        .values()
        .filter(|def| !config.is_hidden(&def.name))
    {
        printer.place(def, &mut sections);
    }

    let mut out = String::new();
    out.push_str(&sections.objects);
    out.push_str(&sections.scalars);
    out.push('\n');
    out.push_str(&sections.inputs);
    out.push_str(&sections.refs);
    out.push_str(&sections.filters);
    out.push_str(&sections.payloads);
    if let Some(query) = &schema.query {
        out.push_str(&printer.root_block(query));
    }
    if let Some(mutation) = &schema.mutation {
        out.push_str(&printer.root_block(mutation));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::{ArgumentDefinition, TypeRef};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_schema_renders_nothing() {
        assert_eq!(stringify(&Schema::default()), "");
    }

    #[test]
    fn renders_sections_in_order() {
        let mut schema = Schema::default();
        schema.insert(TypeDefinition::scalar("String"));
        schema.insert(
            TypeDefinition::object("Dog")
                .with_field(FieldDefinition::new("name", TypeRef::named_non_null("String"))),
        );
        schema.insert(TypeDefinition::enumeration("Color", ["RED", "__HIDDEN", "BLUE"]));

        let expected = "type Dog {\n\tname: String!\n}\n\n\
                        scalar String\n\
                        \n\
                        enum Color {\n\tRED\n\tBLUE\n}\n\n";
        assert_eq!(stringify(&schema), expected);
    }

    #[test]
    fn hidden_names_are_skipped() {
        let mut schema = Schema::default();
        schema.insert(
            TypeDefinition::object("Dog")
                .with_field(FieldDefinition::new("__typename", TypeRef::named("String")))
                .with_field(FieldDefinition::new("name", TypeRef::named("String"))),
        );
        schema.insert(TypeDefinition::object("__Type"));
        let mut query = TypeDefinition::object("Query").with_origin(TypeOrigin::Query);
        query
            .fields
            .push(FieldDefinition::new("__schema", TypeRef::named("String")));
        schema.query = Some(query);

        let text = stringify(&schema);
        assert!(!text.contains("__"));
        assert!(text.contains("\tname: String\n"));
    }

    #[test]
    fn empty_prefix_hides_nothing() {
        let mut schema = Schema::default();
        schema.insert(TypeDefinition::scalar("String"));
        schema.insert(
            TypeDefinition::object("Dog")
                .with_field(FieldDefinition::new("name", TypeRef::named("String"))),
        );
        let config = OutputConfig {
            introspection_prefix: String::new(),
            ..OutputConfig::default()
        };

        assert_eq!(stringify_with(&schema, &config), stringify(&schema));
        assert!(stringify_with(&schema, &config).starts_with("type Dog {\n\tname: String\n}"));
    }

    #[test]
    fn derived_types_are_bucketed_by_origin_not_name() {
        let mut schema = Schema::default();
        schema.insert(TypeDefinition::object("ShippingPayload"));
        schema.insert(TypeDefinition::object("AddDogPayload").with_origin(TypeOrigin::Payload));
        schema.insert(TypeDefinition::input_object("DogRef").with_origin(TypeOrigin::Ref));
        schema.insert(TypeDefinition::input_object("DogFilter").with_origin(TypeOrigin::Filter));

        let text = stringify(&schema);
        let user = text.find("type ShippingPayload").unwrap();
        let reference = text.find("input DogRef").unwrap();
        let filter = text.find("input DogFilter").unwrap();
        let payload = text.find("type AddDogPayload").unwrap();
        assert!(user < reference && reference < filter && filter < payload);
    }

    #[test]
    fn root_arguments_use_configured_separator() {
        let mut schema = Schema::default();
        schema.insert(TypeDefinition::scalar("ID"));
        let mut mutation = TypeDefinition::object("Mutation").with_origin(TypeOrigin::Mutation);
        mutation.fields.push(
            FieldDefinition::new("updateDog", TypeRef::named_non_null("UpdateDogPayload"))
                .with_argument(ArgumentDefinition::new("id", TypeRef::named_non_null("ID")))
                .with_argument(ArgumentDefinition::new("input", TypeRef::named("DogUpdate"))),
        );
        schema.mutation = Some(mutation);

        assert!(
            stringify(&schema)
                .contains("\tupdateDog(id: ID!,input: DogUpdate): UpdateDogPayload!\n")
        );

        let config = OutputConfig {
            argument_separator: ", ".to_string(),
            ..OutputConfig::default()
        };
        assert!(
            stringify_with(&schema, &config)
                .contains("\tupdateDog(id: ID!, input: DogUpdate): UpdateDogPayload!\n")
        );
    }

    #[test]
    fn interfaces_and_unions_render_with_objects() {
        let mut schema = Schema::default();
        schema.insert(
            TypeDefinition::new(TypeKind::Interface, "Named")
                .with_field(FieldDefinition::new("name", TypeRef::named("String"))),
        );
        let mut union = TypeDefinition::new(TypeKind::Union, "Pet");
        union.members = vec!["Cat".to_string(), "Dog".to_string()];
        schema.insert(union);

        assert_eq!(
            stringify(&schema),
            "interface Named {\n\tname: String\n}\n\nunion Pet = Cat | Dog\n\n\n"
        );
    }
}
