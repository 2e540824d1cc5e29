//! Receiver trait and callback dispatch.
//!
//! The receiver is the walker's sole extension point: a trait with one
//! default no-op method per callback, so implementations declare only the
//! events they care about and everything else is silently dropped.
//!
//! Lifecycle, metadata and resource callbacks are invoked directly by the
//! walker with typed arguments. Operator callbacks are fired through
//! [`dispatch`] and uniformly receive the operand stack accumulated since
//! the previous operator, in parse order.

use crate::font::Font;
use crate::interp::operators::Callback;
use crate::model::{Dict, Object};

/// Walker event receiver. Override the callbacks you need.
#[allow(unused_variables)]
pub trait Receiver {
    // === lifecycle ===

    fn begin_document(&mut self, root: &Dict) {}
    fn end_document(&mut self) {}
    fn begin_page_container(&mut self, node: &Dict) {}
    fn end_page_container(&mut self) {}
    fn begin_page(&mut self, node: &Dict) {}
    fn end_page(&mut self) {}
    fn begin_form_xobject(&mut self) {}
    fn end_form_xobject(&mut self) {}

    // === metadata ===

    fn pdf_version(&mut self, version: &str) {}
    fn metadata(&mut self, info: &Dict) {}
    fn xml_metadata(&mut self, data: &[u8]) {}
    fn page_count(&mut self, count: i64) {}

    // === resources ===

    fn resource_procset(&mut self, procs: &[Object]) {}
    fn resource_xobject(&mut self, name: &str, value: &Object) {}
    fn resource_extgstate(&mut self, name: &str, value: &Object) {}
    fn resource_colorspace(&mut self, name: &str, value: &Object) {}
    fn resource_pattern(&mut self, name: &str, value: &Object) {}
    fn resource_font(&mut self, label: &str, font: &Font) {}

    // === text objects and text state ===

    fn begin_text_object(&mut self, operands: &[Object]) {}
    fn end_text_object(&mut self, operands: &[Object]) {}
    fn move_to_start_of_next_line(&mut self, operands: &[Object]) {}
    fn set_character_spacing(&mut self, operands: &[Object]) {}
    fn move_text_position(&mut self, operands: &[Object]) {}
    fn move_text_position_and_set_leading(&mut self, operands: &[Object]) {}
    fn set_text_font_and_size(&mut self, operands: &[Object]) {}
    fn show_text(&mut self, operands: &[Object]) {}
    fn show_text_with_positioning(&mut self, operands: &[Object]) {}
    fn set_text_leading(&mut self, operands: &[Object]) {}
    fn set_text_matrix_and_text_line_matrix(&mut self, operands: &[Object]) {}
    fn set_text_rendering_mode(&mut self, operands: &[Object]) {}
    fn set_text_rise(&mut self, operands: &[Object]) {}
    fn set_word_spacing(&mut self, operands: &[Object]) {}
    fn set_horizontal_text_scaling(&mut self, operands: &[Object]) {}
    fn move_to_next_line_and_show_text(&mut self, operands: &[Object]) {}
    fn set_spacing_next_line_show_text(&mut self, operands: &[Object]) {}

    // === graphics state ===

    fn save_graphics_state(&mut self, operands: &[Object]) {}
    fn restore_graphics_state(&mut self, operands: &[Object]) {}
    fn concatenate_matrix(&mut self, operands: &[Object]) {}
    fn set_line_width(&mut self, operands: &[Object]) {}
    fn set_line_cap_style(&mut self, operands: &[Object]) {}
    fn set_line_join_style(&mut self, operands: &[Object]) {}
    fn set_miter_limit(&mut self, operands: &[Object]) {}
    fn set_line_dash(&mut self, operands: &[Object]) {}
    fn set_color_rendering_intent(&mut self, operands: &[Object]) {}
    fn set_flatness_tolerance(&mut self, operands: &[Object]) {}
    fn set_graphics_state_parameters(&mut self, operands: &[Object]) {}

    // === path construction ===

    fn begin_new_subpath(&mut self, operands: &[Object]) {}
    fn append_line(&mut self, operands: &[Object]) {}
    fn append_curved_segment(&mut self, operands: &[Object]) {}
    fn append_curved_segment_initial_point_replicated(&mut self, operands: &[Object]) {}
    fn append_curved_segment_final_point_replicated(&mut self, operands: &[Object]) {}
    fn close_subpath(&mut self, operands: &[Object]) {}
    fn append_rectangle(&mut self, operands: &[Object]) {}

    // === path painting ===

    fn stroke_path(&mut self, operands: &[Object]) {}
    fn close_and_stroke_path(&mut self, operands: &[Object]) {}
    fn fill_path_with_nonzero(&mut self, operands: &[Object]) {}
    fn fill_path_with_even_odd(&mut self, operands: &[Object]) {}
    fn fill_stroke(&mut self, operands: &[Object]) {}
    fn close_fill_stroke(&mut self, operands: &[Object]) {}
    fn fill_stroke_with_even_odd(&mut self, operands: &[Object]) {}
    fn close_fill_stroke_with_even_odd(&mut self, operands: &[Object]) {}
    fn end_path(&mut self, operands: &[Object]) {}
    fn set_clipping_path_with_nonzero(&mut self, operands: &[Object]) {}
    fn set_clipping_path_with_even_odd(&mut self, operands: &[Object]) {}

    // === color ===

    fn set_stroke_color_space(&mut self, operands: &[Object]) {}
    fn set_nonstroke_color_space(&mut self, operands: &[Object]) {}
    fn set_gray_for_stroking(&mut self, operands: &[Object]) {}
    fn set_gray_for_nonstroking(&mut self, operands: &[Object]) {}
    fn set_rgb_color_for_stroking(&mut self, operands: &[Object]) {}
    fn set_rgb_color_for_nonstroking(&mut self, operands: &[Object]) {}
    fn set_cmyk_color_for_stroking(&mut self, operands: &[Object]) {}
    fn set_cmyk_color_for_nonstroking(&mut self, operands: &[Object]) {}
    fn set_color_for_stroking(&mut self, operands: &[Object]) {}
    fn set_color_for_nonstroking(&mut self, operands: &[Object]) {}
    fn set_color_for_stroking_and_special(&mut self, operands: &[Object]) {}
    fn set_color_for_nonstroking_and_special(&mut self, operands: &[Object]) {}
    fn paint_area_with_shading_pattern(&mut self, operands: &[Object]) {}

    // === XObjects, inline images, marked content ===

    fn invoke_xobject(&mut self, operands: &[Object]) {}
    fn begin_inline_image(&mut self, operands: &[Object]) {}
    fn begin_inline_image_data(&mut self, operands: &[Object]) {}
    fn end_inline_image(&mut self, operands: &[Object]) {}
    fn begin_marked_content(&mut self, operands: &[Object]) {}
    fn begin_marked_content_with_pl(&mut self, operands: &[Object]) {}
    fn define_marked_content_point(&mut self, operands: &[Object]) {}
    fn define_marked_content_with_pl(&mut self, operands: &[Object]) {}
    fn end_marked_content(&mut self, operands: &[Object]) {}
    fn set_glyph_width(&mut self, operands: &[Object]) {}
    fn set_glyph_width_and_bounding_box(&mut self, operands: &[Object]) {}

    // === compatibility sections ===

    fn begin_compatibility_section(&mut self, operands: &[Object]) {}
    fn end_compatibility_section(&mut self, operands: &[Object]) {}
}

/// Route an operator callback to the matching receiver method.
pub fn dispatch<R: Receiver + ?Sized>(receiver: &mut R, callback: Callback, operands: &[Object]) {
    match callback {
        Callback::AppendCurvedSegment => receiver.append_curved_segment(operands),
        Callback::AppendCurvedSegmentFinalPointReplicated => {
            receiver.append_curved_segment_final_point_replicated(operands)
        }
        Callback::AppendCurvedSegmentInitialPointReplicated => {
            receiver.append_curved_segment_initial_point_replicated(operands)
        }
        Callback::AppendLine => receiver.append_line(operands),
        Callback::AppendRectangle => receiver.append_rectangle(operands),
        Callback::BeginCompatibilitySection => receiver.begin_compatibility_section(operands),
        Callback::BeginInlineImage => receiver.begin_inline_image(operands),
        Callback::BeginInlineImageData => receiver.begin_inline_image_data(operands),
        Callback::BeginMarkedContent => receiver.begin_marked_content(operands),
        Callback::BeginMarkedContentWithPl => receiver.begin_marked_content_with_pl(operands),
        Callback::BeginNewSubpath => receiver.begin_new_subpath(operands),
        Callback::BeginTextObject => receiver.begin_text_object(operands),
        Callback::CloseAndStrokePath => receiver.close_and_stroke_path(operands),
        Callback::CloseFillStroke => receiver.close_fill_stroke(operands),
        Callback::CloseFillStrokeWithEvenOdd => receiver.close_fill_stroke_with_even_odd(operands),
        Callback::CloseSubpath => receiver.close_subpath(operands),
        Callback::ConcatenateMatrix => receiver.concatenate_matrix(operands),
        Callback::DefineMarkedContentPoint => receiver.define_marked_content_point(operands),
        Callback::DefineMarkedContentWithPl => receiver.define_marked_content_with_pl(operands),
        Callback::EndCompatibilitySection => receiver.end_compatibility_section(operands),
        Callback::EndInlineImage => receiver.end_inline_image(operands),
        Callback::EndMarkedContent => receiver.end_marked_content(operands),
        Callback::EndPath => receiver.end_path(operands),
        Callback::EndTextObject => receiver.end_text_object(operands),
        Callback::FillPathWithEvenOdd => receiver.fill_path_with_even_odd(operands),
        Callback::FillPathWithNonzero => receiver.fill_path_with_nonzero(operands),
        Callback::FillStroke => receiver.fill_stroke(operands),
        Callback::FillStrokeWithEvenOdd => receiver.fill_stroke_with_even_odd(operands),
        Callback::InvokeXobject => receiver.invoke_xobject(operands),
        Callback::MoveTextPosition => receiver.move_text_position(operands),
        Callback::MoveTextPositionAndSetLeading => {
            receiver.move_text_position_and_set_leading(operands)
        }
        Callback::MoveToNextLineAndShowText => receiver.move_to_next_line_and_show_text(operands),
        Callback::MoveToStartOfNextLine => receiver.move_to_start_of_next_line(operands),
        Callback::PaintAreaWithShadingPattern => receiver.paint_area_with_shading_pattern(operands),
        Callback::RestoreGraphicsState => receiver.restore_graphics_state(operands),
        Callback::SaveGraphicsState => receiver.save_graphics_state(operands),
        Callback::SetCharacterSpacing => receiver.set_character_spacing(operands),
        Callback::SetClippingPathWithEvenOdd => receiver.set_clipping_path_with_even_odd(operands),
        Callback::SetClippingPathWithNonzero => receiver.set_clipping_path_with_nonzero(operands),
        Callback::SetCmykColorForNonstroking => receiver.set_cmyk_color_for_nonstroking(operands),
        Callback::SetCmykColorForStroking => receiver.set_cmyk_color_for_stroking(operands),
        Callback::SetColorForNonstroking => receiver.set_color_for_nonstroking(operands),
        Callback::SetColorForNonstrokingAndSpecial => {
            receiver.set_color_for_nonstroking_and_special(operands)
        }
        Callback::SetColorForStroking => receiver.set_color_for_stroking(operands),
        Callback::SetColorForStrokingAndSpecial => {
            receiver.set_color_for_stroking_and_special(operands)
        }
        Callback::SetColorRenderingIntent => receiver.set_color_rendering_intent(operands),
        Callback::SetFlatnessTolerance => receiver.set_flatness_tolerance(operands),
        Callback::SetGlyphWidth => receiver.set_glyph_width(operands),
        Callback::SetGlyphWidthAndBoundingBox => {
            receiver.set_glyph_width_and_bounding_box(operands)
        }
        Callback::SetGraphicsStateParameters => receiver.set_graphics_state_parameters(operands),
        Callback::SetGrayForNonstroking => receiver.set_gray_for_nonstroking(operands),
        Callback::SetGrayForStroking => receiver.set_gray_for_stroking(operands),
        Callback::SetHorizontalTextScaling => receiver.set_horizontal_text_scaling(operands),
        Callback::SetLineCapStyle => receiver.set_line_cap_style(operands),
        Callback::SetLineDash => receiver.set_line_dash(operands),
        Callback::SetLineJoinStyle => receiver.set_line_join_style(operands),
        Callback::SetLineWidth => receiver.set_line_width(operands),
        Callback::SetMiterLimit => receiver.set_miter_limit(operands),
        Callback::SetNonstrokeColorSpace => receiver.set_nonstroke_color_space(operands),
        Callback::SetRgbColorForNonstroking => receiver.set_rgb_color_for_nonstroking(operands),
        Callback::SetRgbColorForStroking => receiver.set_rgb_color_for_stroking(operands),
        Callback::SetSpacingNextLineShowText => receiver.set_spacing_next_line_show_text(operands),
        Callback::SetStrokeColorSpace => receiver.set_stroke_color_space(operands),
        Callback::SetTextFontAndSize => receiver.set_text_font_and_size(operands),
        Callback::SetTextLeading => receiver.set_text_leading(operands),
        Callback::SetTextMatrixAndTextLineMatrix => {
            receiver.set_text_matrix_and_text_line_matrix(operands)
        }
        Callback::SetTextRenderingMode => receiver.set_text_rendering_mode(operands),
        Callback::SetTextRise => receiver.set_text_rise(operands),
        Callback::SetWordSpacing => receiver.set_word_spacing(operands),
        Callback::ShowText => receiver.show_text(operands),
        Callback::ShowTextWithPositioning => receiver.show_text_with_positioning(operands),
        Callback::StrokePath => receiver.stroke_path(operands),
    }
}
