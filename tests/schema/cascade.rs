use entity::sea_orm_active_enums::Rol;
use maskngo_test_utils::prelude::*;
use rust_decimal_macros::dec;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// Expect every line of a rental to go with it while the costumes stay
#[tokio::test]
async fn deleting_renta_removes_its_lines_only() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (cliente, usuario, disfraz, renta, _) = test.shop().insert_mock_renta_with_detalle().await?;
    test.shop().insert_mock_disfraz("TERROR0001", 3, 3).await?;
    test.shop()
        .insert_mock_detalle_renta(renta.id_renta, "TERROR0001", 2, dec!(150.00))
        .await?;

    // A second rental whose line must survive
    let otra = test
        .shop()
        .insert_mock_renta(cliente.id_cliente, usuario.id_usuario, renta.fecha_devolucion)
        .await?;
    test.shop()
        .insert_mock_detalle_renta(otra.id_renta, &disfraz.codigo_barras, 1, dec!(300.00))
        .await?;

    entity::prelude::Rentas::delete_by_id(renta.id_renta)
        .exec(&test.state.db)
        .await?;

    let lineas = entity::prelude::DetalleRentas::find()
        .filter(entity::detalle_rentas::Column::IdRenta.eq(renta.id_renta))
        .count(&test.state.db)
        .await?;
    let otras_lineas = entity::prelude::DetalleRentas::find()
        .filter(entity::detalle_rentas::Column::IdRenta.eq(otra.id_renta))
        .count(&test.state.db)
        .await?;
    let inventario = entity::prelude::Inventario::find()
        .count(&test.state.db)
        .await?;

    assert_eq!(lineas, 0);
    assert_eq!(otras_lineas, 1);
    assert_eq!(inventario, 2);

    Ok(())
}

#[tokio::test]
async fn deleting_venta_removes_its_lines() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (_, _, disfraz, venta, _) = test
        .shop()
        .insert_mock_venta_with_detalle("VEN-20250121-0001")
        .await?;
    test.shop()
        .insert_mock_detalle_venta(venta.id_venta, &disfraz.codigo_barras, 2, dec!(850.00))
        .await?;

    entity::prelude::Ventas::delete_by_id(venta.id_venta)
        .exec(&test.state.db)
        .await?;

    let lineas = entity::prelude::DetalleVentas::find()
        .count(&test.state.db)
        .await?;
    let after = entity::prelude::Inventario::find_by_id(disfraz.codigo_barras.clone())
        .one(&test.state.db)
        .await?;

    assert_eq!(lineas, 0);
    assert_eq!(after, Some(disfraz));

    Ok(())
}

/// Expect a user who only cancelled sales to stay referenced
#[tokio::test]
async fn cancelling_usuario_is_restricted() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (_, _, _, venta, _) = test
        .shop()
        .insert_mock_venta_with_detalle("VEN-20250121-0001")
        .await?;
    let admin = test.shop().insert_mock_usuario("admin", Rol::Admin).await?;
    maskngo::data::venta::VentaRepository::new(&test.state.db)
        .cancel(
            venta.id_venta,
            admin.id_usuario,
            "Duplicada",
            maskngo::util::time::now(),
        )
        .await?;

    let result = entity::prelude::Usuarios::delete_by_id(admin.id_usuario)
        .exec(&test.state.db)
        .await;

    assert!(result.is_err());

    Ok(())
}
