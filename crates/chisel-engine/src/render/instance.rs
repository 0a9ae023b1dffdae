//! Per-instance vertex records for the border-corner and blur shaders.

use bytemuck::{Pod, Zeroable};

use crate::blur::BlurPass;
use crate::border::CornerAttributes;
use crate::coords::{Rect, Vec2};

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

fn vec2(v: Vec2) -> [f32; 2] {
    v.to_array()
}

fn vec4(a: Vec2, b: Vec2) -> [f32; 4] {
    [a.x, a.y, b.x, b.y]
}

fn rect(r: Rect) -> [f32; 4] {
    vec4(r.min(), r.max())
}

// ── border corner ─────────────────────────────────────────────────────────

/// One border corner, as read by the corner shader.
///
/// Layout (168 bytes, locations after the quad vertex):
///
///  offset   0  segment_origin  [f32; 2]   loc 1
///  offset   8  segment_size    [f32; 2]   loc 2
///  offset  16  clip_center     [f32; 2]   loc 3
///  offset  24  clip_sign       [f32; 2]   loc 4  (zero disables the clip)
///  offset  32  radii0          [f32; 4]   loc 5  (outer.xy, inner.xy)
///  offset  48  radii1          [f32; 4]   loc 6  (secondary pair; -100 = none)
///  offset  64  edge_line       [f32; 4]   loc 7  (point.xy, normal.xy)
///  offset  80  edge_distance   [f32; 4]   loc 8
///  offset  96  color00         [f32; 4]   loc 9
///  offset 112  color01         [f32; 4]   loc 10
///  offset 128  color10         [f32; 4]   loc 11
///  offset 144  color11         [f32; 4]   loc 12
///  offset 160  selects         [f32; 2]   loc 13 (.x = alpha, .y = sdf)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct BorderCornerInstance {
    pub segment_origin: [f32; 2],
    pub segment_size: [f32; 2],
    pub clip_center: [f32; 2],
    pub clip_sign: [f32; 2],
    pub radii0: [f32; 4],
    pub radii1: [f32; 4],
    pub edge_line: [f32; 4],
    pub edge_distance: [f32; 4],
    pub color00: [f32; 4],
    pub color01: [f32; 4],
    pub color10: [f32; 4],
    pub color11: [f32; 4],
    pub selects: [f32; 2],
}

impl BorderCornerInstance {
    const ATTRS: [wgpu::VertexAttribute; 13] = wgpu::vertex_attr_array![
        1 => Float32x2,  // segment_origin
        2 => Float32x2,  // segment_size
        3 => Float32x2,  // clip_center
        4 => Float32x2,  // clip_sign
        5 => Float32x4,  // radii0
        6 => Float32x4,  // radii1
        7 => Float32x4,  // edge_line
        8 => Float32x4,  // edge_distance
        9 => Float32x4,  // color00
        10 => Float32x4, // color01
        11 => Float32x4, // color10
        12 => Float32x4, // color11
        13 => Float32x2  // selects
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BorderCornerInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

impl From<&CornerAttributes> for BorderCornerInstance {
    fn from(attrs: &CornerAttributes) -> Self {
        let clip = &attrs.clip;
        let colors = &attrs.colors;
        Self {
            segment_origin: vec2(attrs.segment.origin),
            segment_size: vec2(attrs.segment.size),
            clip_center: vec2(clip.center),
            clip_sign: vec2(clip.sign),
            radii0: vec4(clip.primary[0], clip.primary[1]),
            radii1: vec4(clip.secondary[0], clip.secondary[1]),
            edge_line: vec4(attrs.edge_line.point, attrs.edge_line.normal),
            edge_distance: attrs.edge.distances,
            color00: colors.c00.to_array(),
            color01: colors.c01.to_array(),
            color10: colors.c10.to_array(),
            color11: colors.c11.to_array(),
            selects: [attrs.edge.alpha_select, attrs.edge.sdf_select],
        }
    }
}

// ── blur ──────────────────────────────────────────────────────────────────

/// One blur pass over one target rect.
///
/// Rects are packed as `(min.xy, max.xy)`; `uv_rect` and `uv_bounds` are
/// normalized to the source texture.
///
///  offset  0  target_rect    [f32; 4]   loc 1
///  offset 16  uv_rect        [f32; 4]   loc 2
///  offset 32  uv_bounds      [f32; 4]   loc 3
///  offset 48  offset_step    [f32; 2]   loc 4
///  offset 56  sigma_support  [f32; 2]   loc 5
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct BlurInstance {
    pub target_rect: [f32; 4],
    pub uv_rect: [f32; 4],
    pub uv_bounds: [f32; 4],
    pub offset_step: [f32; 2],
    pub sigma_support: [f32; 2],
}

impl BlurInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x4, // target_rect
        2 => Float32x4, // uv_rect
        3 => Float32x4, // uv_bounds
        4 => Float32x2, // offset_step
        5 => Float32x2  // sigma_support
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BlurInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

impl From<&BlurPass> for BlurInstance {
    fn from(pass: &BlurPass) -> Self {
        Self {
            target_rect: rect(pass.target),
            uv_rect: rect(pass.uv_rect),
            uv_bounds: rect(pass.uv_bounds),
            offset_step: vec2(pass.offset_step),
            sigma_support: [pass.sigma, pass.support as f32],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blur::{BlurConfig, BlurDirection, BlurTask, TargetKind};
    use crate::border::{
        BorderDescriptor, BorderStyle, CornerBuilder, SideSelect, SENTINEL_RADIUS,
    };
    use crate::coords::{ColorRgba, CornerRadii};

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn strides_match_documented_layout() {
        assert_eq!(std::mem::size_of::<QuadVertex>(), 8);
        assert_eq!(QuadVertex::layout().array_stride, 8);
        assert_eq!(QuadVertex::layout().step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(std::mem::size_of::<BorderCornerInstance>(), 168);
        assert_eq!(std::mem::size_of::<BlurInstance>(), 64);
        assert_eq!(BorderCornerInstance::layout().array_stride, 168);
        assert_eq!(BlurInstance::layout().array_stride, 64);
    }

    #[test]
    fn corner_attributes_follow_quad_vertex() {
        let attrs = BorderCornerInstance::layout().attributes;
        assert_eq!(attrs.len(), 13);
        assert_eq!(attrs[0].shader_location, 1);
        assert_eq!(attrs[12].shader_location, 13);
        assert_eq!(attrs[12].offset, 160);
    }

    // ── conversion ────────────────────────────────────────────────────────

    #[test]
    fn corner_instance_packs_attributes() {
        let colors = [
            ColorRgba::new(1.0, 0.0, 0.0, 1.0),
            ColorRgba::new(0.0, 1.0, 0.0, 1.0),
            ColorRgba::new(0.0, 0.0, 1.0, 1.0),
            ColorRgba::white(),
        ];
        let radii = CornerRadii::all(10.0);
        let border = BorderDescriptor::uniform(4.0, BorderStyle::Solid, colors, radii);
        let local = Rect::new(0.0, 0.0, 100.0, 50.0);
        let corners = CornerBuilder::new().build_border(&border, local, SideSelect::Both);

        let tl = BorderCornerInstance::from(&corners[0]);
        assert_eq!(tl.segment_origin, [0.0, 0.0]);
        assert_eq!(tl.segment_size, [10.0, 10.0]);
        assert_eq!(tl.clip_center, [10.0, 10.0]);
        assert_eq!(tl.clip_sign, [1.0, 1.0]);
        assert_eq!(tl.radii0, [10.0, 10.0, 6.0, 6.0]);
        assert_eq!(tl.radii1, [SENTINEL_RADIUS; 4]);
        assert_eq!(tl.selects, [1.0, 0.0]);

        let br = BorderCornerInstance::from(&corners[2]);
        assert_eq!(br.clip_center, [90.0, 40.0]);
        assert_eq!(br.clip_sign, [-1.0, -1.0]);

        let pair = [tl, br];
        let bytes: &[u8] = bytemuck::cast_slice(&pair);
        assert_eq!(bytes.len(), 2 * 168);
    }

    #[test]
    fn blur_instance_packs_pass() {
        let task = BlurTask {
            target: Rect::new(0.0, 0.0, 16.0, 16.0),
            source: Rect::new(8.0, 8.0, 16.0, 16.0),
            sigma: 1.0,
            direction: BlurDirection::Vertical,
            kind: TargetKind::Alpha,
        };
        let pass = BlurPass::new(&task, Vec2::new(32.0, 32.0), &BlurConfig::default());
        let inst = BlurInstance::from(&pass);
        assert_eq!(inst.target_rect, [0.0, 0.0, 16.0, 16.0]);
        assert_eq!(inst.uv_rect, [0.25, 0.25, 0.75, 0.75]);
        assert_eq!(inst.offset_step, [0.0, 1.0 / 32.0]);
        assert_eq!(inst.sigma_support, [1.0, 4.0]);
    }
}
