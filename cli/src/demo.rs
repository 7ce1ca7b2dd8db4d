//! Demo programs rendered by the CLI.

use phpgen::{
    all_suffix, attribute, chained_call, class_reference, doc_comment, function_call, indent,
    join, join_first_pair, lines, maybe_nowdoc, maybe_wrap, method_call, prefix_first, statement,
    suffix_first, suffix_last, wrap, CallOptions, Code, Document, FullyQualified, Group, Line,
    ReferenceMode, Result,
};

fn class(path: &str) -> Result<FullyQualified> {
    FullyQualified::new(path)
}

/// A small final class with attributes and a parent constructor call.
pub fn class_demo(document: &Document) -> Result<Vec<Line>> {
    let parent_call = method_call(
        document,
        "parent",
        "__construct",
        ["'Hello, World!'", "true"],
        CallOptions::static_call(),
    )?;
    let date = document.import(class("DateTimeImmutable")?);

    Ok(phpgen::resolve(lines![
        "// Auto-generated example file",
        "",
        attribute(document, class("Example\\Attributes\\Something")?, lines![]),
        attribute(document, class("Example\\Attributes\\Single")?, "value: \"Hello, World!\""),
        attribute(
            document,
            class("Example\\Attributes\\Multiple")?,
            ["value: \"Hello, World!\"", "other: \"Other value\""],
        ),
        format!(
            "final readonly class Demo extends {}",
            document.import(class("Example\\ParentClass")?)
        ),
        "{",
        indent(lines![
            "public function __construct(",
            indent(format!("private {date} $date,")),
            ") {",
            indent(statement(parent_call)),
            "}",
        ]),
        "}",
    ]))
}

/// A tour through every combinator, spread over a class, an enum and a function.
pub fn feature_tour(document: &Document) -> Result<Vec<Line>> {
    let service = document.import(class("App\\Services\\MainService")?);
    let status = document.import(class("App\\Enums\\Status")?);
    let active = document.import_enum_case(class("App\\Enums\\Status")?, "Active");

    Ok(phpgen::resolve(lines![
        "// Auto-generated feature tour",
        "",
        doc_comment(["Shows what the generator can do.", "", "@internal"]),
        format!(
            "final class FeatureTour extends {}",
            document.import(class("Example\\BaseClass")?)
        ),
        "{",
        indent(lines![
            "public function __construct(",
            indent([
                format!("private readonly {service} $service,"),
                format!("private {status} $status = {active},"),
                "string $name = 'default',".to_string(),
            ]),
            ") {",
            indent(constructor_body(document)?),
            "}",
            "",
            doc_comment("Demonstrates line combinators."),
            "public function processData(array $data): void",
            "{",
            indent(process_body(document)?),
            "}",
            "",
            "private function calculate(array $data): int",
            "{",
            indent(lines![
                "return match($data['type'] ?? null) {",
                indent(all_suffix(",", [
                    "'sum' => array_sum($data['values'])",
                    "'count' => count($data['values'])",
                    "default => 0",
                ])),
                "};",
            ]),
            "}",
        ]),
        "}",
        "",
        enum_demo(),
        "",
        "function helperFunction(string $input): string",
        "{",
        Group::indent(1, statement(function_call("strtoupper", "$input"))),
        "}",
    ]))
}

fn constructor_body(document: &Document) -> Result<Vec<Line>> {
    let parent = method_call(
        document,
        "parent",
        "__construct",
        ["enabled: true", "timeout: 30"],
        CallOptions::static_call(),
    )?;

    let builder = method_call(document, "$this", "getBuilder", lines![], CallOptions::new())?;
    let chain = chained_call(
        chained_call(builder, "setName", "$name", CallOptions::new()),
        "setDebug",
        "true",
        CallOptions::new(),
    );

    let log = method_call(
        document,
        "Psr\\Log\\Logger",
        "info",
        ["'Constructor initialized'", "['class' => __CLASS__]"],
        CallOptions::static_call().with_trailing_commas(false),
    )?;

    Ok(phpgen::resolve(lines![
        statement(parent),
        "",
        statement(chain),
        "",
        statement(log),
    ]))
}

fn process_body(document: &Document) -> Result<Vec<Line>> {
    let created = method_call(document, "DateTime", "__construct", "'now'", CallOptions::new())?;
    let text = maybe_nowdoc("This is a\nmulti-line\nstring example", "TXT")?;
    let reference = class_reference(document, class("Example\\SomeClass")?, ReferenceMode::Import);

    let deferred = Code::lazy(move || {
        let clock = document.import_path("Psr\\Clock\\ClockInterface");
        match clock {
            Ok(alias) => lines![format!("$clock = {alias}::class;")],
            Err(_) => Code::empty(),
        }
    });

    Ok(phpgen::resolve(lines![
        prefix_first("$result = ", suffix_last(";", "$this->calculate($data)")),
        "",
        statement(wrap("$wrapped = [", "$result", Some("]"))),
        "",
        maybe_wrap(true, "if ($result) { ", "$this->save($result);", Some(" }")),
        "",
        "$items = [",
        indent(all_suffix(",", ["'first'", "'second'", "// Comment not suffixed"])),
        "];",
        "",
        statement(function_call("array_map", ["fn($x) => $x * 2", "$items"])),
        "",
        format!("$concatenated = sprintf('%s', {});", join(", ", ["$a", "$b", "$c"])),
        "",
        statement(join_first_pair(["$prefix", " = 'value'", " . 'suffix'"])),
        "",
        "foreach ($items as $item) {",
        indent(suffix_first(":", ["echo $item", "echo PHP_EOL"])),
        "}",
        "",
        statement(wrap("$date = ", created, None)),
        "",
        format!("$text = {text};"),
        "",
        format!("$className = {reference};"),
        deferred,
    ]))
}

fn enum_demo() -> Vec<Line> {
    phpgen::resolve(lines![
        "enum Color: string",
        "{",
        indent(lines![
            "case RED = '#FF0000';",
            "case GREEN = '#00FF00';",
            "",
            "public function toRgb(): array",
            "{",
            indent(lines![
                "return match($this) {",
                indent(all_suffix(",", ["self::RED => [255, 0, 0]", "self::GREEN => [0, 255, 0]"])),
                "};",
            ]),
            "}",
        ]),
        "}",
    ])
}
