use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;

/// Draw set of points passing the filter, coloured by grade.
#[derive(Component)]
pub struct VividPoints;

/// Draw set of filtered-out points kept for spatial context.
#[derive(Component)]
pub struct DimmedPoints;

/// Single marker point rendered when the dataset is empty.
#[derive(Component)]
pub struct FallbackMarker;

/// Build a line-list mesh from world-space segment pairs.
pub fn line_segment_mesh(segments: &[[Vec3; 2]]) -> Mesh {
    let mut vertices = Vec::with_capacity(segments.len() * 2);
    for [a, b] in segments {
        vertices.push([a.x, a.y, a.z]);
        vertices.push([b.x, b.y, b.z]);
    }
    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh
}

/// Build a point-list mesh with one vertex colour per point.
pub fn point_cloud_mesh(positions: &[Vec3], colours: &[[f32; 4]]) -> Mesh {
    let vertices: Vec<[f32; 3]> = positions.iter().map(|p| [p.x, p.y, p.z]).collect();
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colours.to_vec());
    mesh
}

/// Unlit translucent material used for frame lines and point sets;
/// vertex colours multiply against white.
pub fn unlit_material(colour: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: colour,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    }
}
