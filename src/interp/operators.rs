//! Content-stream operator table.
//!
//! Maps PDF operator mnemonics (1-3 ASCII bytes, including `'` and `"`) to
//! the callback each one fires on the receiver. The table is immutable and
//! shared: the content lexer borrows it to tell operator tokens apart from
//! bare keywords it does not know.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Callback fired by a content-stream operator.
///
/// One variant per callback name in the receiver vocabulary; several
/// mnemonics may share a variant (`f` and `F` both fill with nonzero
/// winding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Callback {
    AppendCurvedSegment,
    AppendCurvedSegmentFinalPointReplicated,
    AppendCurvedSegmentInitialPointReplicated,
    AppendLine,
    AppendRectangle,
    BeginCompatibilitySection,
    BeginInlineImage,
    BeginInlineImageData,
    BeginMarkedContent,
    BeginMarkedContentWithPl,
    BeginNewSubpath,
    BeginTextObject,
    CloseAndStrokePath,
    CloseFillStroke,
    CloseFillStrokeWithEvenOdd,
    CloseSubpath,
    ConcatenateMatrix,
    DefineMarkedContentPoint,
    DefineMarkedContentWithPl,
    EndCompatibilitySection,
    EndInlineImage,
    EndMarkedContent,
    EndPath,
    EndTextObject,
    FillPathWithEvenOdd,
    FillPathWithNonzero,
    FillStroke,
    FillStrokeWithEvenOdd,
    InvokeXobject,
    MoveTextPosition,
    MoveTextPositionAndSetLeading,
    MoveToNextLineAndShowText,
    MoveToStartOfNextLine,
    PaintAreaWithShadingPattern,
    RestoreGraphicsState,
    SaveGraphicsState,
    SetCharacterSpacing,
    SetClippingPathWithEvenOdd,
    SetClippingPathWithNonzero,
    SetCmykColorForNonstroking,
    SetCmykColorForStroking,
    SetColorForNonstroking,
    SetColorForNonstrokingAndSpecial,
    SetColorForStroking,
    SetColorForStrokingAndSpecial,
    SetColorRenderingIntent,
    SetFlatnessTolerance,
    SetGlyphWidth,
    SetGlyphWidthAndBoundingBox,
    SetGraphicsStateParameters,
    SetGrayForNonstroking,
    SetGrayForStroking,
    SetHorizontalTextScaling,
    SetLineCapStyle,
    SetLineDash,
    SetLineJoinStyle,
    SetLineWidth,
    SetMiterLimit,
    SetNonstrokeColorSpace,
    SetRgbColorForNonstroking,
    SetRgbColorForStroking,
    SetSpacingNextLineShowText,
    SetStrokeColorSpace,
    SetTextFontAndSize,
    SetTextLeading,
    SetTextMatrixAndTextLineMatrix,
    SetTextRenderingMode,
    SetTextRise,
    SetWordSpacing,
    ShowText,
    ShowTextWithPositioning,
    StrokePath,
}

impl Callback {
    /// Canonical callback name, as seen by receivers.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AppendCurvedSegment => "append_curved_segment",
            Self::AppendCurvedSegmentFinalPointReplicated => {
                "append_curved_segment_final_point_replicated"
            }
            Self::AppendCurvedSegmentInitialPointReplicated => {
                "append_curved_segment_initial_point_replicated"
            }
            Self::AppendLine => "append_line",
            Self::AppendRectangle => "append_rectangle",
            Self::BeginCompatibilitySection => "begin_compatibility_section",
            Self::BeginInlineImage => "begin_inline_image",
            Self::BeginInlineImageData => "begin_inline_image_data",
            Self::BeginMarkedContent => "begin_marked_content",
            Self::BeginMarkedContentWithPl => "begin_marked_content_with_pl",
            Self::BeginNewSubpath => "begin_new_subpath",
            Self::BeginTextObject => "begin_text_object",
            Self::CloseAndStrokePath => "close_and_stroke_path",
            Self::CloseFillStroke => "close_fill_stroke",
            Self::CloseFillStrokeWithEvenOdd => "close_fill_stroke_with_even_odd",
            Self::CloseSubpath => "close_subpath",
            Self::ConcatenateMatrix => "concatenate_matrix",
            Self::DefineMarkedContentPoint => "define_marked_content_point",
            Self::DefineMarkedContentWithPl => "define_marked_content_with_pl",
            Self::EndCompatibilitySection => "end_compatibility_section",
            Self::EndInlineImage => "end_inline_image",
            Self::EndMarkedContent => "end_marked_content",
            Self::EndPath => "end_path",
            Self::EndTextObject => "end_text_object",
            Self::FillPathWithEvenOdd => "fill_path_with_even_odd",
            Self::FillPathWithNonzero => "fill_path_with_nonzero",
            Self::FillStroke => "fill_stroke",
            Self::FillStrokeWithEvenOdd => "fill_stroke_with_even_odd",
            Self::InvokeXobject => "invoke_xobject",
            Self::MoveTextPosition => "move_text_position",
            Self::MoveTextPositionAndSetLeading => "move_text_position_and_set_leading",
            Self::MoveToNextLineAndShowText => "move_to_next_line_and_show_text",
            Self::MoveToStartOfNextLine => "move_to_start_of_next_line",
            Self::PaintAreaWithShadingPattern => "paint_area_with_shading_pattern",
            Self::RestoreGraphicsState => "restore_graphics_state",
            Self::SaveGraphicsState => "save_graphics_state",
            Self::SetCharacterSpacing => "set_character_spacing",
            Self::SetClippingPathWithEvenOdd => "set_clipping_path_with_even_odd",
            Self::SetClippingPathWithNonzero => "set_clipping_path_with_nonzero",
            Self::SetCmykColorForNonstroking => "set_cmyk_color_for_nonstroking",
            Self::SetCmykColorForStroking => "set_cmyk_color_for_stroking",
            Self::SetColorForNonstroking => "set_color_for_nonstroking",
            Self::SetColorForNonstrokingAndSpecial => "set_color_for_nonstroking_and_special",
            Self::SetColorForStroking => "set_color_for_stroking",
            Self::SetColorForStrokingAndSpecial => "set_color_for_stroking_and_special",
            Self::SetColorRenderingIntent => "set_color_rendering_intent",
            Self::SetFlatnessTolerance => "set_flatness_tolerance",
            Self::SetGlyphWidth => "set_glyph_width",
            Self::SetGlyphWidthAndBoundingBox => "set_glyph_width_and_bounding_box",
            Self::SetGraphicsStateParameters => "set_graphics_state_parameters",
            Self::SetGrayForNonstroking => "set_gray_for_nonstroking",
            Self::SetGrayForStroking => "set_gray_for_stroking",
            Self::SetHorizontalTextScaling => "set_horizontal_text_scaling",
            Self::SetLineCapStyle => "set_line_cap_style",
            Self::SetLineDash => "set_line_dash",
            Self::SetLineJoinStyle => "set_line_join_style",
            Self::SetLineWidth => "set_line_width",
            Self::SetMiterLimit => "set_miter_limit",
            Self::SetNonstrokeColorSpace => "set_nonstroke_color_space",
            Self::SetRgbColorForNonstroking => "set_rgb_color_for_nonstroking",
            Self::SetRgbColorForStroking => "set_rgb_color_for_stroking",
            Self::SetSpacingNextLineShowText => "set_spacing_next_line_show_text",
            Self::SetStrokeColorSpace => "set_stroke_color_space",
            Self::SetTextFontAndSize => "set_text_font_and_size",
            Self::SetTextLeading => "set_text_leading",
            Self::SetTextMatrixAndTextLineMatrix => "set_text_matrix_and_text_line_matrix",
            Self::SetTextRenderingMode => "set_text_rendering_mode",
            Self::SetTextRise => "set_text_rise",
            Self::SetWordSpacing => "set_word_spacing",
            Self::ShowText => "show_text",
            Self::ShowTextWithPositioning => "show_text_with_positioning",
            Self::StrokePath => "stroke_path",
        }
    }

    /// True for the four text-showing callbacks whose string operands are
    /// decoded through the current font before dispatch.
    pub const fn is_show_text(self) -> bool {
        matches!(
            self,
            Self::ShowText
                | Self::ShowTextWithPositioning
                | Self::MoveToNextLineAndShowText
                | Self::SetSpacingNextLineShowText
        )
    }
}

/// Operator mnemonic -> callback, per PDF 32000-1 Annex A.
const OPERATORS: &[(&str, Callback)] = &[
    ("b", Callback::CloseFillStroke),
    ("B", Callback::FillStroke),
    ("b*", Callback::CloseFillStrokeWithEvenOdd),
    ("B*", Callback::FillStrokeWithEvenOdd),
    ("BDC", Callback::BeginMarkedContentWithPl),
    ("BI", Callback::BeginInlineImage),
    ("BMC", Callback::BeginMarkedContent),
    ("BT", Callback::BeginTextObject),
    ("BX", Callback::BeginCompatibilitySection),
    ("c", Callback::AppendCurvedSegment),
    ("cm", Callback::ConcatenateMatrix),
    ("cs", Callback::SetNonstrokeColorSpace),
    ("CS", Callback::SetStrokeColorSpace),
    ("d", Callback::SetLineDash),
    ("d0", Callback::SetGlyphWidth),
    ("d1", Callback::SetGlyphWidthAndBoundingBox),
    ("Do", Callback::InvokeXobject),
    ("DP", Callback::DefineMarkedContentWithPl),
    ("EI", Callback::EndInlineImage),
    ("EMC", Callback::EndMarkedContent),
    ("ET", Callback::EndTextObject),
    ("EX", Callback::EndCompatibilitySection),
    ("f", Callback::FillPathWithNonzero),
    ("F", Callback::FillPathWithNonzero),
    ("f*", Callback::FillPathWithEvenOdd),
    ("g", Callback::SetGrayForNonstroking),
    ("G", Callback::SetGrayForStroking),
    ("gs", Callback::SetGraphicsStateParameters),
    ("h", Callback::CloseSubpath),
    ("i", Callback::SetFlatnessTolerance),
    ("ID", Callback::BeginInlineImageData),
    ("j", Callback::SetLineJoinStyle),
    ("J", Callback::SetLineCapStyle),
    ("k", Callback::SetCmykColorForNonstroking),
    ("K", Callback::SetCmykColorForStroking),
    ("l", Callback::AppendLine),
    ("m", Callback::BeginNewSubpath),
    ("M", Callback::SetMiterLimit),
    ("MP", Callback::DefineMarkedContentPoint),
    ("n", Callback::EndPath),
    ("q", Callback::SaveGraphicsState),
    ("Q", Callback::RestoreGraphicsState),
    ("re", Callback::AppendRectangle),
    ("rg", Callback::SetRgbColorForNonstroking),
    ("RG", Callback::SetRgbColorForStroking),
    ("ri", Callback::SetColorRenderingIntent),
    ("s", Callback::CloseAndStrokePath),
    ("S", Callback::StrokePath),
    ("sc", Callback::SetColorForNonstroking),
    ("SC", Callback::SetColorForStroking),
    ("scn", Callback::SetColorForNonstrokingAndSpecial),
    ("SCN", Callback::SetColorForStrokingAndSpecial),
    ("sh", Callback::PaintAreaWithShadingPattern),
    ("T*", Callback::MoveToStartOfNextLine),
    ("Tc", Callback::SetCharacterSpacing),
    ("Td", Callback::MoveTextPosition),
    ("TD", Callback::MoveTextPositionAndSetLeading),
    ("Tf", Callback::SetTextFontAndSize),
    ("Tj", Callback::ShowText),
    ("TJ", Callback::ShowTextWithPositioning),
    ("TL", Callback::SetTextLeading),
    ("Tm", Callback::SetTextMatrixAndTextLineMatrix),
    ("Tr", Callback::SetTextRenderingMode),
    ("Ts", Callback::SetTextRise),
    ("Tw", Callback::SetWordSpacing),
    ("Tz", Callback::SetHorizontalTextScaling),
    ("v", Callback::AppendCurvedSegmentInitialPointReplicated),
    ("w", Callback::SetLineWidth),
    ("W", Callback::SetClippingPathWithNonzero),
    ("W*", Callback::SetClippingPathWithEvenOdd),
    ("y", Callback::AppendCurvedSegmentFinalPointReplicated),
    ("'", Callback::MoveToNextLineAndShowText),
    ("\"", Callback::SetSpacingNextLineShowText),
];

/// Immutable operator mnemonic -> callback table.
pub struct OperatorTable {
    map: HashMap<&'static str, Callback>,
}

impl OperatorTable {
    fn new() -> Self {
        Self {
            map: OPERATORS.iter().copied().collect(),
        }
    }

    /// Look up a mnemonic given as raw bytes.
    pub fn get(&self, mnemonic: &[u8]) -> Option<Callback> {
        std::str::from_utf8(mnemonic)
            .ok()
            .and_then(|m| self.map.get(m).copied())
    }

    /// Membership predicate for the lexer.
    pub fn contains(&self, mnemonic: &[u8]) -> bool {
        self.get(mnemonic).is_some()
    }

    /// Number of distinct mnemonics.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Always false; the table is never empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// The shared operator table, constructed once.
pub static OPERATOR_TABLE: LazyLock<OperatorTable> = LazyLock::new(OperatorTable::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_all_mnemonics() {
        assert_eq!(OPERATOR_TABLE.len(), OPERATORS.len());
        assert_eq!(OPERATOR_TABLE.get(b"Tj"), Some(Callback::ShowText));
        assert_eq!(OPERATOR_TABLE.get(b"'"), Some(Callback::MoveToNextLineAndShowText));
        assert_eq!(OPERATOR_TABLE.get(b"\""), Some(Callback::SetSpacingNextLineShowText));
        assert!(OPERATOR_TABLE.get(b"XYZ").is_none());
    }

    #[test]
    fn test_show_text_family() {
        assert!(Callback::ShowText.is_show_text());
        assert!(Callback::ShowTextWithPositioning.is_show_text());
        assert!(Callback::MoveToNextLineAndShowText.is_show_text());
        assert!(Callback::SetSpacingNextLineShowText.is_show_text());
        assert!(!Callback::SetTextFontAndSize.is_show_text());
    }

    #[test]
    fn test_callback_names_follow_the_show_text_convention() {
        for (_, cb) in OPERATORS {
            assert_eq!(cb.is_show_text(), cb.name().contains("show_text"));
        }
    }
}
